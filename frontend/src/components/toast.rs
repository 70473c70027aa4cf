use crate::components::icons::{AlertCircle, CheckCircle, Close};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// 一条提示消息
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }
}

/// 右上角提示框，`millis` 毫秒后自动关闭
///
/// 新消息会替换旧的计时器。
#[component]
pub fn Toast(notice: RwSignal<Option<Notice>>, millis: u32) -> impl IntoView {
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let timer = notice
            .with(Option::is_some)
            .then(|| Timeout::new(millis, move || notice.set(None)));
        // 旧的 Timeout 在这里被 drop，随即取消
        pending.set_value(timer);
    });

    move || {
        notice.get().map(|n| {
            let (alert, title) = if n.is_error {
                ("alert alert-error shadow-lg", "Action Required")
            } else {
                ("alert alert-success shadow-lg", "Success")
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div role="alert" class=alert>
                        {if n.is_error {
                            view! { <AlertCircle attr:class="h-6 w-6" /> }.into_any()
                        } else {
                            view! { <CheckCircle attr:class="h-6 w-6" /> }.into_any()
                        }}
                        <div>
                            <p class="font-bold text-sm">{title}</p>
                            <p class="text-sm">{n.message}</p>
                        </div>
                        <button class="btn btn-ghost btn-xs btn-circle" on:click=move |_| notice.set(None)>
                            <Close attr:class="h-4 w-4" />
                        </button>
                    </div>
                </div>
            }
        })
    }
}
