use leptos::ev;
use leptos::prelude::*;

/// Modal dialog with an overlay; clicking the overlay or the close button
/// closes it, clicks inside the dialog never reach the overlay.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle_overlay_click = move |_| on_close.run(());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                    <button class="modal__close" on:click=move |_| on_close.run(())>
                        "\u{00d7}"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
