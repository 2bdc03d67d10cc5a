use crate::shared::icons::icon;
use contracts::domain::a001_attendance::StatusCategory;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Formatted value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Colour of the card, follows the status palette
    #[prop(optional)]
    tone: Option<StatusCategory>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let class = match tone {
        Some(category) => format!("stat-card stat-card--{}", category.name()),
        None => "stat-card".to_string(),
    };

    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
