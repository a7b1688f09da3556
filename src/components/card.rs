//! Card Component
//!
//! Generic clickable content preview: optional image, title, description,
//! wrapped in a single link.

use dioxus::prelude::*;

/// Compose the class list for a card root element.
///
/// Base class always present; the image variant class only when an image is
/// supplied and non-empty; caller classes appended verbatim. Empty tokens
/// are dropped, so the result never carries doubled or trailing spaces.
fn card_classes(image: Option<&str>, extra: Option<&str>) -> String {
    let mut classes = vec!["card"];
    if image.is_some_and(|src| !src.is_empty()) {
        classes.push("card--with-image");
    }
    if let Some(extra) = extra {
        if !extra.is_empty() {
            classes.push(extra);
        }
    }
    classes.join(" ")
}

/// Self-contained clickable preview of a content entry
///
/// The whole card is one link; its accessible name is the title, set
/// explicitly so screen readers announce it regardless of markup order.
/// No custom key handling - the link participates in normal keyboard
/// navigation.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         title: "The Open Source Way 2.0".to_string(),
///         description: "Industry-standard handbook".to_string(),
///         link: "/papers/open-source-way-2.0".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Card(
    /// Display title, also the link's accessible name
    title: String,
    /// Short description below the title
    description: String,
    /// Destination path for the wrapping link
    link: String,
    /// Optional preview image URL
    #[props(default = None)]
    image: Option<String>,
    /// Optional additional CSS classes
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    // An empty image URL counts as no image, matching the class logic
    let image = image.filter(|src| !src.is_empty());
    let card_class = card_classes(image.as_deref(), class.as_deref());

    rsx! {
        article { class: "{card_class}",
            a {
                href: "{link}",
                class: "card__link",
                "aria-label": "{title}",

                if let Some(src) = &image {
                    div { class: "card__image-container",
                        img {
                            src: "{src}",
                            alt: "{title}",
                            class: "card__image",
                            loading: "lazy",
                        }
                    }
                }

                div { class: "card__content",
                    h3 { class: "card__title", "{title}" }
                    p { class: "card__description", "{description}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_class_only() {
        assert_eq!(card_classes(None, None), "card");
    }

    #[test]
    fn image_class_present_iff_image() {
        // Forward direction: image supplied, variant class present.
        assert_eq!(
            card_classes(Some("/img/cover.png"), None),
            "card card--with-image"
        );
        // Reverse direction: no image (or empty), variant class absent.
        assert_eq!(card_classes(None, None), "card");
        assert_eq!(card_classes(Some(""), None), "card");
    }

    #[test]
    fn extra_class_appended_verbatim() {
        assert_eq!(card_classes(None, Some("home-card")), "card home-card");
    }

    #[test]
    fn all_three_classes_in_order() {
        assert_eq!(
            card_classes(Some("/img/cover.png"), Some("home-card")),
            "card card--with-image home-card"
        );
    }

    #[test]
    fn empty_extra_class_leaves_no_trailing_space() {
        assert_eq!(card_classes(None, Some("")), "card");
        assert_eq!(card_classes(Some("/img/cover.png"), Some("")), "card card--with-image");
    }

    #[test]
    fn no_double_spaces() {
        let composed = card_classes(Some("/img/cover.png"), Some("home-card"));
        assert!(!composed.contains("  "));
        assert!(!composed.ends_with(' '));
        assert!(!composed.starts_with(' '));
    }
}
