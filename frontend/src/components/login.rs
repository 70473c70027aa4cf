use crate::auth::{login, use_api, use_auth};
use crate::components::icons::{AlertCircle, CheckCircle, ShieldCheck};
use crate::web::router::{Link, NavState, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use orbit::auth::LOGIN_FAILED;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let router = use_router();

    // 跳转时附带的一次性提示（注册成功、需要登录等）
    let info = match router.take_state() {
        Some(NavState::Message(message)) => Some(message),
        _ => None,
    };

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            let result = login(
                auth,
                &api,
                &username.get_untracked(),
                &password.get_untracked(),
            )
            .await;
            set_is_submitting.set(false);
            match result {
                Ok(()) => router.navigate("/"),
                Err(e) => set_error_msg.set(Some(e.message_or(LOGIN_FAILED))),
            }
        });
    };

    view! {
        <div class="hero min-h-[calc(100vh-64px)]">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4 flex flex-col items-center gap-2">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <ShieldCheck attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                    <p class="text-base-content/70">"Sign in to your Orbit account"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {info.map(|message| view! {
                            <div role="alert" class="alert alert-info text-sm py-2">
                                <CheckCircle attr:class="h-5 w-5" />
                                <span>{message}</span>
                            </div>
                        })}

                        {move || error_msg.get().map(|message| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <AlertCircle attr:class="h-5 w-5" />
                                <span>{message}</span>
                            </div>
                        })}

                        <label class="form-control">
                            <span class="label-text mb-1">"Username"</span>
                            <input
                                type="text"
                                placeholder="Enter your username"
                                class="input input-bordered"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                required
                            />
                        </label>
                        <label class="form-control">
                            <span class="label-text mb-1">"Password"</span>
                            <input
                                type="password"
                                placeholder="••••••••"
                                class="input input-bordered"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                required
                            />
                        </label>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2 text-base-content/70">
                            "Don't have an account? "
                            <Link to="/register" class="link link-primary font-semibold">"Create one"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
