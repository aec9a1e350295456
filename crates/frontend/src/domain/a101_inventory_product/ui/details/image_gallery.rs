use leptos::prelude::*;

/// Галерея изображений товара
#[component]
pub fn ProductImageGallery(images: Vec<String>) -> impl IntoView {
    if images.is_empty() {
        return view! { <div class="gallery gallery--empty"></div> }.into_any();
    }

    let active = RwSignal::new(0usize);
    let count = images.len();
    let images = StoredValue::new(images);

    view! {
        <div class="gallery">
            <div class="gallery__main">
                <img
                    src=move || images.with_value(|imgs| imgs.get(active.get()).cloned().unwrap_or_default())
                    alt="Product"
                />
                {(count > 1).then(|| view! { <span class="gallery__count">{count}</span> })}
            </div>
            {(count > 1).then(|| view! {
                <div class="gallery__thumbs">
                    {images
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| view! {
                            <button
                                class="gallery__thumb"
                                class:gallery__thumb--active=move || active.get() == i
                                on:click=move |_| active.set(i)
                            >
                                <img src=src alt="" />
                            </button>
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
    .into_any()
}
