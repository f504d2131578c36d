//! Generic data table with search, sort and server-side pagination.
//!
//! Renders any collection of uniform records as a desktop table plus a
//! stacked-card layout for narrow viewports (CSS decides which one is
//! visible). The table never fetches anything itself: it displays the rows
//! it is given and reports page changes and searches through callbacks.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Typed value of a single record field, used for default cell rendering,
/// local search and sorting.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(chrono::DateTime<chrono::Utc>),
}

impl FieldValue {
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
            FieldValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        }
    }

    /// Three-way comparison: natural ordering within a variant, display
    /// strings across variants.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
            _ => self
                .display()
                .to_lowercase()
                .cmp(&other.display().to_lowercase()),
        }
    }
}

/// A record the table can display. `id` must be stable and unique within
/// one data set; `field` maps column keys to values (None = missing).
pub trait TableRecord: Clone + Send + Sync + 'static {
    fn id(&self) -> String;
    fn field(&self, key: &str) -> Option<FieldValue>;
}

/// Column descriptor: which field to show and how.
#[derive(Clone)]
pub struct Column<T: TableRecord> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub mobile_hidden: bool,
    pub class: Option<&'static str>,
    pub render: Option<Callback<T, AnyView>>,
}

impl<T: TableRecord> Column<T> {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
            mobile_hidden: false,
            class: None,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Omit this column from the stacked-card layout
    pub fn mobile_hidden(mut self) -> Self {
        self.mobile_hidden = true;
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Custom cell renderer; without one the field value is stringified
    /// and missing values render as "-".
    pub fn render(mut self, render: impl Fn(T) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Callback::new(render));
        self
    }
}

/// Externally driven pagination: the caller owns the page window and
/// re-fetches on every page change; the table only renders the controls.
#[derive(Clone)]
pub struct ServerPagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub on_page_change: Callback<u32>,
}

/// Compare two records by a column key. Missing values order last
/// regardless of direction.
pub fn compare_records<T: TableRecord>(a: &T, b: &T, key: &str, ascending: bool) -> Ordering {
    match (a.field(key), b.field(key)) {
        (Some(x), Some(y)) => {
            let ord = x.compare(&y);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        }
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_rows<T: TableRecord>(rows: &mut [T], key: &str, ascending: bool) {
    rows.sort_by(|a, b| compare_records(a, b, key, ascending));
}

/// Case-insensitive substring filter against the stringified `key` field.
/// An empty query keeps everything; records without the field are dropped.
pub fn filter_rows<T: TableRecord>(rows: Vec<T>, key: &str, query: &str) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            row.field(key)
                .map(|value| value.display().to_lowercase().contains(&query))
                .unwrap_or(false)
        })
        .collect()
}

pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    ((total + page_size as u64 - 1) / page_size as u64) as u32
}

/// Sort-state transition for a header click: a new column starts ascending,
/// a repeated click flips the direction.
fn next_sort_state(
    sort_key: Option<&'static str>,
    ascending: bool,
    clicked: &'static str,
) -> (Option<&'static str>, bool) {
    match sort_key {
        Some(key) if key == clicked => (Some(clicked), !ascending),
        _ => (Some(clicked), true),
    }
}

#[component]
pub fn DataTable<T>(
    /// Rows for the current page (the caller owns the window)
    #[prop(into)]
    data: Signal<Vec<T>>,
    /// Column descriptors, in display order
    columns: Vec<Column<T>>,
    /// Replaces the rows with a single loading indicator
    #[prop(into, optional)]
    loading: Signal<bool>,
    /// Shown when no rows remain after filtering
    #[prop(into, default = String::from("No records found"))]
    empty_message: String,
    /// Invoked with the full record when a row is activated
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
    /// Per-row action controls; clicks inside never reach on_row_click
    #[prop(optional)]
    actions: Option<Callback<T, AnyView>>,
    /// Search input placeholder
    #[prop(optional, into)]
    search_placeholder: MaybeProp<String>,
    /// Caller-owned search text (controlled mode display value)
    #[prop(optional, into)]
    search_value: Option<Signal<String>>,
    /// When present, keystrokes are forwarded verbatim and no local
    /// filtering happens (the caller is expected to filter or re-fetch)
    #[prop(optional)]
    on_search: Option<Callback<String>>,
    /// Field to match when filtering locally
    #[prop(optional)]
    search_key: Option<&'static str>,
    /// Server-side pagination descriptor
    #[prop(optional, into)]
    server_pagination: MaybeProp<ServerPagination>,
) -> impl IntoView
where
    T: TableRecord,
{
    let (internal_search, set_internal_search) = signal(String::new());
    let (debounced_search, set_debounced_search) = signal(String::new());
    let (sort_key, set_sort_key) = signal(None::<&'static str>);
    let (sort_ascending, set_sort_ascending) = signal(true);

    let columns = StoredValue::new(columns);
    let empty_message = StoredValue::new(empty_message);

    let shown_search = move || match search_value {
        Some(external) => external.get(),
        None => internal_search.get(),
    };

    let handle_search_input = move |value: String| match on_search {
        Some(callback) => callback.run(value),
        None => set_internal_search.set(value),
    };

    // Debounced search: every keystroke cancels the pending timeout, so
    // only the last one within the quiet window commits the filter query.
    let debounce_timeout = StoredValue::new(None::<i32>);
    let cancel_pending = move || {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }
    };
    Effect::new(move |_| {
        let query = shown_search();
        cancel_pending();
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            set_debounced_search.set(query.clone());
        }) as Box<dyn Fn()>);
        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    });
    // Unmounting must not commit a filter query after disposal
    on_cleanup(cancel_pending);

    let handle_sort = move |clicked: &'static str| {
        let (key, ascending) = next_sort_state(sort_key.get(), sort_ascending.get(), clicked);
        set_sort_key.set(key);
        set_sort_ascending.set(ascending);
    };

    // Filter first (local mode only), then sort whatever is present.
    let visible_rows = move || {
        let mut rows = data.get();
        if on_search.is_none() {
            if let Some(key) = search_key {
                rows = filter_rows(rows, key, &debounced_search.get());
            }
        }
        if let Some(key) = sort_key.get() {
            sort_rows(&mut rows, key, sort_ascending.get());
        }
        rows
    };

    let has_actions = actions.is_some();
    let clickable = on_row_click.is_some();
    let column_span = columns.with_value(|cols| cols.len()) + usize::from(has_actions);

    let cell_content = move |column: &Column<T>, row: &T| -> AnyView {
        match &column.render {
            Some(render) => render.run(row.clone()),
            None => match row.field(column.key) {
                Some(value) => value.display().into_any(),
                None => "-".into_any(),
            },
        }
    };

    let row_click = move |row: T| {
        if let Some(callback) = on_row_click {
            callback.run(row);
        }
    };

    let header_cells = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|column| {
                    let key = column.key;
                    let sortable = column.sortable;
                    let mut class = String::from("data-table__header-cell");
                    if sortable {
                        class.push_str(" data-table__header-cell--sortable");
                    }
                    if let Some(extra) = column.class {
                        class.push(' ');
                        class.push_str(extra);
                    }
                    let indicator = move || {
                        (sortable && sort_key.get() == Some(key))
                            .then(|| if sort_ascending.get() { " \u{2191}" } else { " \u{2193}" })
                    };
                    view! {
                        <th
                            class=class
                            on:click=move |_| {
                                if sortable {
                                    handle_sort(key);
                                }
                            }
                        >
                            {column.label}
                            <span class="data-table__sort-indicator">{indicator}</span>
                        </th>
                    }
                })
                .collect_view()
        })
    };

    let table_body = move || {
        if loading.get() {
            view! {
                <tr>
                    <td colspan=column_span class="data-table__state-cell">
                        <div class="spinner"></div>
                    </td>
                </tr>
            }
            .into_any()
        } else if visible_rows().is_empty() {
            view! {
                <tr>
                    <td colspan=column_span class="data-table__state-cell data-table__empty">
                        {empty_message.get_value()}
                    </td>
                </tr>
            }
            .into_any()
        } else {
            view! {
                <For
                    each=move || visible_rows()
                    key=|row| row.id()
                    children=move |row: T| {
                        let action_row = row.clone();
                        let click_row = row.clone();
                        view! {
                            <tr
                                class=if clickable {
                                    "data-table__row data-table__row--clickable"
                                } else {
                                    "data-table__row"
                                }
                                on:click=move |_| row_click(click_row.clone())
                            >
                                {columns
                                    .with_value(|cols| {
                                        cols.iter()
                                            .map(|column| {
                                                let extra = column.class.unwrap_or("");
                                                view! {
                                                    <td class=format!(
                                                        "data-table__cell {}",
                                                        extra,
                                                    )>{cell_content(column, &row)}</td>
                                                }
                                            })
                                            .collect_view()
                                    })}
                                {actions
                                    .map(|render| {
                                        view! {
                                            <td
                                                class="data-table__cell data-table__actions"
                                                on:click=|ev: MouseEvent| ev.stop_propagation()
                                            >
                                                {render.run(action_row.clone())}
                                            </td>
                                        }
                                    })}
                            </tr>
                        }
                    }
                />
            }
            .into_any()
        }
    };

    let card_body = move || {
        if loading.get() {
            view! {
                <div class="data-table__state-cell">
                    <div class="spinner"></div>
                </div>
            }
            .into_any()
        } else if visible_rows().is_empty() {
            view! {
                <div class="data-table__state-cell data-table__empty">
                    {empty_message.get_value()}
                </div>
            }
            .into_any()
        } else {
            view! {
                <For
                    each=move || visible_rows()
                    key=|row| row.id()
                    children=move |row: T| {
                        let action_row = row.clone();
                        let click_row = row.clone();
                        view! {
                            <div
                                class=if clickable {
                                    "data-table__card data-table__card--clickable"
                                } else {
                                    "data-table__card"
                                }
                                on:click=move |_| row_click(click_row.clone())
                            >
                                {columns
                                    .with_value(|cols| {
                                        cols.iter()
                                            .filter(|column| !column.mobile_hidden)
                                            .map(|column| {
                                                view! {
                                                    <div class="data-table__card-row">
                                                        <span class="data-table__card-label">
                                                            {column.label}
                                                        </span>
                                                        <span class="data-table__card-value">
                                                            {cell_content(column, &row)}
                                                        </span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                    })}
                                {actions
                                    .map(|render| {
                                        view! {
                                            <div
                                                class="data-table__card-actions"
                                                on:click=|ev: MouseEvent| ev.stop_propagation()
                                            >
                                                {render.run(action_row.clone())}
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                    }
                />
            }
            .into_any()
        }
    };

    let pagination_footer = move || {
        server_pagination.get().and_then(|pagination| {
            let pages = total_pages(pagination.total, pagination.page_size);
            (pages > 1).then(|| {
                let current = pagination.page;
                let on_change = pagination.on_page_change;
                view! {
                    <div class="data-table__pagination">
                        <span class="data-table__total">
                            {format!("{} records", pagination.total)}
                        </span>
                        <div class="data-table__pager">
                            <button
                                class="button button--secondary"
                                disabled={current <= 1}
                                on:click=move |_| {
                                    if current > 1 {
                                        on_change.run(current - 1);
                                    }
                                }
                            >
                                "Previous"
                            </button>
                            <span class="data-table__page-indicator">
                                {format!("{} / {}", current, pages)}
                            </span>
                            <button
                                class="button button--secondary"
                                disabled={current >= pages}
                                on:click=move |_| {
                                    if current < pages {
                                        on_change.run(current + 1);
                                    }
                                }
                            >
                                "Next"
                            </button>
                        </div>
                    </div>
                }
            })
        })
    };

    view! {
        <div class="data-table">
            <div class="data-table__search">
                <input
                    type="text"
                    class="form__input"
                    placeholder=move || {
                        search_placeholder.get().unwrap_or_else(|| "Search...".to_string())
                    }
                    prop:value=shown_search
                    on:input=move |ev| handle_search_input(event_target_value(&ev))
                />
            </div>
            <div class="data-table__desktop">
                <table class="data-table__table">
                    <thead>
                        <tr>
                            {header_cells}
                            {has_actions
                                .then(|| {
                                    view! {
                                        <th class="data-table__header-cell data-table__header-cell--actions">
                                            "Actions"
                                        </th>
                                    }
                                })}
                        </tr>
                    </thead>
                    <tbody>{table_body}</tbody>
                </table>
            </div>
            <div class="data-table__cards">{card_body}</div>
            {pagination_footer}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: u32,
        email: String,
        name: Option<String>,
        logins: Option<f64>,
    }

    impl Row {
        fn new(id: u32, email: &str, name: Option<&str>, logins: Option<f64>) -> Self {
            Self {
                id,
                email: email.to_string(),
                name: name.map(str::to_string),
                logins,
            }
        }
    }

    impl TableRecord for Row {
        fn id(&self) -> String {
            self.id.to_string()
        }

        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "email" => Some(FieldValue::Text(self.email.clone())),
                "name" => self.name.clone().map(FieldValue::Text),
                "logins" => self.logins.map(FieldValue::Number),
                _ => None,
            }
        }
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let mut rows = vec![
            Row::new(1, "a@x.co", None, Some(3.0)),
            Row::new(2, "b@x.co", Some("Bea"), None),
            Row::new(3, "c@x.co", Some("Ada"), Some(1.0)),
        ];

        sort_rows(&mut rows, "name", true);
        assert_eq!(ids(&rows), vec![3, 2, 1]);
        sort_rows(&mut rows, "name", false);
        assert_eq!(ids(&rows), vec![2, 3, 1]);

        sort_rows(&mut rows, "logins", true);
        assert_eq!(ids(&rows), vec![3, 1, 2]);
        sort_rows(&mut rows, "logins", false);
        assert_eq!(ids(&rows), vec![1, 3, 2]);
    }

    #[test]
    fn repeated_header_clicks_alternate_direction() {
        let state = next_sort_state(None, true, "email");
        assert_eq!(state, (Some("email"), true));

        let state = next_sort_state(state.0, state.1, "email");
        assert_eq!(state, (Some("email"), false));

        let state = next_sort_state(state.0, state.1, "email");
        assert_eq!(state, (Some("email"), true));

        // switching to another column starts ascending again
        let state = next_sort_state(Some("email"), false, "name");
        assert_eq!(state, (Some("name"), true));
    }

    #[test]
    fn descending_reverses_ascending_for_distinct_values() {
        let mut asc = vec![
            Row::new(1, "c@x.co", Some("c"), None),
            Row::new(2, "a@x.co", Some("a"), None),
            Row::new(3, "b@x.co", Some("b"), None),
        ];
        let mut desc = asc.clone();
        sort_rows(&mut asc, "email", true);
        sort_rows(&mut desc, "email", false);
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn filter_matches_substring_case_insensitively() {
        let rows: Vec<Row> = (0..10)
            .map(|i| {
                let email = if i < 3 {
                    format!("user{}@HiveMail.com", i)
                } else {
                    format!("user{}@other.org", i)
                };
                Row::new(i, &email, None, None)
            })
            .collect();

        let filtered = filter_rows(rows.clone(), "email", "hivemail");
        assert_eq!(ids(&filtered), vec![0, 1, 2]);

        // empty and whitespace-only queries keep everything
        assert_eq!(filter_rows(rows.clone(), "email", "").len(), 10);
        assert_eq!(filter_rows(rows.clone(), "email", "   ").len(), 10);

        // records missing the field never match
        assert!(filter_rows(rows, "name", "a").is_empty());
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(5, 0), 0);
    }
}
