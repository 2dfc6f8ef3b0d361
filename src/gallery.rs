//! Documentation gallery.
//!
//! A single HTML page showing every variant, size and tone, the icon
//! placements and the interaction states, plus a small playground that asks
//! the server to render a button with HTMX.

use maud::{DOCTYPE, Markup, html};

use crate::button::{Button, ButtonSize, ButtonVariant, IconName};
use crate::config::GalleryConfig;

/// Render the full gallery page.
pub fn render_page(config: &GalleryConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content="Button variants, sizes and states";
                title { (config.title) }
                script src=(config.htmx_src) {}
                link rel="stylesheet" href=(config.stylesheet);
            }
            body class="min-h-screen bg-white text-gray-900 antialiased" {
                main class="container mx-auto max-w-5xl px-4 py-8 md:px-6" {
                    h1 class="text-2xl font-bold" { (config.title) }

                    (section("Variants", "Each variant in both sizes, normal and destructive.", variant_grid()))
                    (section("Icons", "Icons before, after and around the label.", row(&icon_buttons())))
                    (section(
                        "States",
                        "Disabled and loading buttons are not interactive. While loading, the spinner replaces the right icon if there is one, otherwise the left.",
                        row(&state_buttons()),
                    ))
                    (section("Playground", "Render any combination on the server.", playground()))
                }
            }
        }
    }
}

fn section(title: &str, description: &str, body: Markup) -> Markup {
    html! {
        section class="space-y-4 py-6" {
            h2 class="text-lg font-semibold" { (title) }
            p class="text-sm text-gray-600" { (description) }
            (body)
        }
    }
}

fn row(buttons: &[Button]) -> Markup {
    html! {
        div class="flex flex-wrap items-center gap-3" {
            @for button in buttons {
                (button.render())
            }
        }
    }
}

fn variant_grid() -> Markup {
    html! {
        table {
            thead {
                tr {
                    th {}
                    th class="text-xs" { "sm" }
                    th class="text-xs" { "md" }
                    th class="text-xs" { "sm destructive" }
                    th class="text-xs" { "md destructive" }
                }
            }
            tbody {
                @for variant in ButtonVariant::ALL {
                    tr data-variant=(variant.as_str()) {
                        th class="pr-6 text-left text-sm font-medium" { (variant.as_str()) }
                        @for destructive in [false, true] {
                            @for size in ButtonSize::ALL {
                                td class="p-2" {
                                    (Button::new()
                                        .variant(variant)
                                        .size(size)
                                        .destructive(destructive)
                                        .child(html! { "Button" })
                                        .render())
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn icon_buttons() -> [Button; 6] {
    [
        Button::new()
            .left_icon(IconName::Plus.render())
            .child(html! { "New item" }),
        Button::new()
            .variant(ButtonVariant::Secondary)
            .right_icon(IconName::ArrowRight.render())
            .child(html! { "Continue" }),
        Button::new()
            .variant(ButtonVariant::Outline)
            .left_icon(IconName::ArrowLeft.render())
            .right_icon(IconName::ArrowRight.render())
            .child(html! { "Both" }),
        Button::new()
            .variant(ButtonVariant::Ghost)
            .destructive(true)
            .left_icon(IconName::Trash.render())
            .child(html! { "Delete" }),
        Button::new()
            .variant(ButtonVariant::Link)
            .right_icon(IconName::ArrowRight.render())
            .child(html! { "Learn more" }),
        Button::new()
            .variant(ButtonVariant::Ghost)
            .aria_label("Close")
            .left_icon(IconName::X.render()),
    ]
}

fn state_buttons() -> [Button; 5] {
    [
        Button::new().disabled(true).child(html! { "Disabled" }),
        Button::new()
            .variant(ButtonVariant::Secondary)
            .disabled(true)
            .right_icon(IconName::Check.render())
            .child(html! { "Disabled with icon" }),
        Button::new().loading(true).child(html! { "Saving" }),
        Button::new()
            .variant(ButtonVariant::Secondary)
            .loading(true)
            .left_icon(IconName::Send.render())
            .right_icon(IconName::ArrowRight.render())
            .child(html! { "Sending" }),
        Button::new()
            .variant(ButtonVariant::LinkSecondary)
            .loading(true)
            .child(html! { "Refreshing" }),
    ]
}

fn playground() -> Markup {
    let icon_select = |name: &str| {
        html! {
            select name=(name) {
                option value="" { "none" }
                @for icon in IconName::ALL {
                    option value=(icon.as_str()) { (icon.as_str()) }
                }
            }
        }
    };

    html! {
        form
            class="grid grid-cols-2 gap-3 md:grid-cols-4"
            hx-get="/api/render"
            hx-target="#playground-output"
            hx-trigger="submit, change"
        {
            label class="text-sm" {
                "variant "
                select name="variant" {
                    @for variant in ButtonVariant::ALL {
                        option value=(variant.as_str()) { (variant.as_str()) }
                    }
                }
            }
            label class="text-sm" {
                "size "
                select name="size" {
                    @for size in ButtonSize::ALL {
                        option value=(size.as_str()) selected[size == ButtonSize::default()] { (size.as_str()) }
                    }
                }
            }
            label class="text-sm" { "left icon " (icon_select("left_icon")) }
            label class="text-sm" { "right icon " (icon_select("right_icon")) }
            @for flag in ["destructive", "disabled", "loading"] {
                label class="text-sm" {
                    input type="checkbox" name=(flag) value="true";
                    " " (flag)
                }
            }
            label class="text-sm" {
                "label "
                input type="text" name="label" value="Button";
            }
            (Button::new()
                .button_type("submit")
                .variant(ButtonVariant::Outline)
                .size(ButtonSize::Sm)
                .child(html! { "Render" })
                .render())
        }
        div id="playground-output" class="py-4" {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GalleryConfig {
        GalleryConfig {
            title: "Buttons <beta>".to_string(),
            stylesheet: "/static/app.css".to_string(),
            htmx_src: "/static/htmx.js".to_string(),
            static_dir: "static".to_string(),
        }
    }

    #[test]
    fn test_page_shows_every_combination() {
        let page = render_page(&config()).into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        for variant in ButtonVariant::ALL {
            assert!(page.contains(&format!(r#"data-variant="{variant}""#)));
        }
        let grid = variant_grid().into_string();
        assert_eq!(grid.matches("<button").count(), 24);
    }

    #[test]
    fn test_title_is_escaped() {
        let page = render_page(&config()).into_string();
        assert!(page.contains("<title>Buttons &lt;beta&gt;</title>"));
        assert!(page.contains(r#"<script src="/static/htmx.js"></script>"#));
    }

    #[test]
    fn test_states_include_spinners() {
        let states = row(&state_buttons()).into_string();
        assert_eq!(states.matches("animate-spin").count(), 3);
        assert_eq!(states.matches(" disabled>").count(), 5);
    }

    #[test]
    fn test_playground_targets_render_endpoint() {
        let form = playground().into_string();
        assert!(form.contains(r#"hx-get="/api/render""#));
        assert!(form.contains(r#"<div id="playground-output" class="py-4"></div>"#));
        assert_eq!(form.matches(r#"<option value="">none</option>"#).count(), 2);
    }
}
