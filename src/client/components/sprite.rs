use dioxus::prelude::*;
use dioxus_logger::tracing;
use pokedex::backend::model::app::AppState;
use tokio_util::sync::CancellationToken;

/// Sprite image loaded in the background through the shared sprite service.
///
/// Each mounted sprite owns a cancellation token; unmounting cancels it so a
/// pending download stops instead of writing into a dropped view.
#[component]
pub fn Sprite(url: Option<String>, alt: String, size: Option<u32>) -> Element {
    let state = use_context::<AppState>();
    let token = use_hook(CancellationToken::new);
    let size = size.unwrap_or(96);

    {
        let token = token.clone();
        use_drop(move || token.cancel());
    }

    let data_url = use_resource(use_reactive!(|url| {
        let sprites = state.sprites.clone();
        let token = token.clone();

        async move {
            let url = url?;
            match sprites.fetch(&url, &token).await {
                Ok(data_url) => data_url,
                Err(err) => {
                    tracing::warn!("Failed to load sprite {}: {}", url, err);
                    None
                }
            }
        }
    }));

    let data_url = data_url.read().clone().flatten();

    rsx!(
        if let Some(src) = data_url {
            img { class: "sprite", src: "{src}", alt: "{alt}", width: size, height: size }
        } else {
            div { class: "sprite sprite-placeholder", style: "width: {size}px; height: {size}px;" }
        }
    )
}
