use leptos::prelude::*;

/// Visual accent of a stat card
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StatColor {
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
}

impl StatColor {
    fn class(self) -> &'static str {
        match self {
            StatColor::Blue => "stat-card stat-card--blue",
            StatColor::Green => "stat-card stat-card--green",
            StatColor::Yellow => "stat-card stat-card--yellow",
            StatColor::Red => "stat-card stat-card--red",
            StatColor::Purple => "stat-card stat-card--purple",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    title: String,
    /// Primary numeric value
    #[prop(into)]
    value: Signal<u64>,
    /// Visual accent
    #[prop(optional, default = StatColor::Blue)]
    color: StatColor,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    description: MaybeProp<String>,
) -> impl IntoView {
    let description_view = move || {
        description
            .get()
            .map(|text| view! { <p class="stat-card__description">{text}</p> })
    };

    view! {
        <div class=color.class()>
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{move || value.get().to_string()}</p>
            {description_view}
        </div>
    }
}
