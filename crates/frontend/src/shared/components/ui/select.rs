use leptos::prelude::*;

/// Select component over (value, label) options
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Selected option value
    #[prop(into)]
    value: Signal<String>,
    /// Change handler, receives the selected option value
    on_change: Callback<String>,
    /// Options as (value, label) pairs
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <select
                class="form__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == selected_value
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
