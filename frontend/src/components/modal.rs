use leptos::prelude::*;

/// 确认对话框
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(optional)] danger: bool,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_class = if danger {
        "btn btn-error"
    } else {
        "btn btn-primary"
    };

    view! {
        <div class="modal" class:modal-open=move || open.get() role="dialog">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>
                <p class="py-4 text-base-content/70">{message}</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class=confirm_class on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())></div>
        </div>
    }
}

/// 只有一个关闭按钮的信息框
#[component]
pub fn InfoDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal" class:modal-open=move || open.get() role="dialog">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{move || title.get()}</h3>
                <p class="py-4 break-words">{move || message.get()}</p>
                <div class="modal-action">
                    <button class="btn btn-primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
        </div>
    }
}
