use contracts::domain::a001_attendance::StatusPalette;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "accent", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Attendance status badge, coloured by the palette of the hosting view.
/// Unknown labels render as a neutral badge with the raw text.
#[component]
pub fn AttendanceStatusBadge(
    #[prop(into)] status: String,
    palette: StatusPalette,
) -> impl IntoView {
    let presentation = palette.classify(&status);
    let variant = presentation.category.badge_variant().to_string();

    view! {
        <Badge variant=variant class=format!("badge--status-{}", presentation.category.name())>
            {presentation.label}
        </Badge>
    }
}
