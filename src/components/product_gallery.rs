//! Product Media Gallery
//!
//! Thumbnail strip driving a main image. Clicking a thumbnail makes it
//! active and swaps the main image to the same source upsized to width 800.

use leptos::prelude::*;

/// Width requested for the main image.
const MAIN_IMAGE_WIDTH: u32 = 800;

#[component]
pub fn ProductGallery(images: Vec<String>) -> impl IntoView {
    let images = StoredValue::new(images);
    let (active, set_active) = signal(0usize);

    let main_src = move || {
        images.with_value(|imgs| {
            imgs.get(active.get())
                .map(|src| upsize_image_url(src, MAIN_IMAGE_WIDTH))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="product-gallery">
            <div class="product-gallery__main" data-product-media-main="">
                <img src=main_src alt="" />
            </div>
            <div class="product-gallery__thumbs">
                <For
                    each={move || images.get_value().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, _)| *index
                    children=move |(index, src)| {
                        view! {
                            <button
                                class="product-gallery__thumb"
                                class:active=move || active.get() == index
                                data-media-thumbnail=""
                                on:click=move |_| set_active.set(index)
                            >
                                <img src=src alt="" />
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}

/// Rewrite a `width=N` query parameter to the requested width. URLs without
/// one pass through unchanged.
pub fn upsize_image_url(src: &str, width: u32) -> String {
    let Some(start) = src.find("width=") else {
        return src.to_string();
    };
    let digits_start = start + "width=".len();
    let digits_len = src[digits_start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return src.to_string();
    }
    format!(
        "{}width={}{}",
        &src[..start],
        width,
        &src[digits_start + digits_len..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsizes_width_param() {
        assert_eq!(
            upsize_image_url("//cdn.example/scarf.jpg?v=1&width=120", 800),
            "//cdn.example/scarf.jpg?v=1&width=800"
        );
        assert_eq!(
            upsize_image_url("//cdn.example/scarf.jpg?width=64&crop=center", 800),
            "//cdn.example/scarf.jpg?width=800&crop=center"
        );
    }

    #[test]
    fn test_urls_without_width_pass_through() {
        assert_eq!(
            upsize_image_url("//cdn.example/scarf.jpg", 800),
            "//cdn.example/scarf.jpg"
        );
        assert_eq!(
            upsize_image_url("//cdn.example/scarf.jpg?width=", 800),
            "//cdn.example/scarf.jpg?width="
        );
    }
}
