use crate::auth::use_api;
use crate::components::icons::AlertCircle;
use crate::web::router::{Link, NavState, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use orbit::auth::{REGISTER_FAILED, REGISTER_SUCCEEDED};
use orbit::shared::RegisterRequest;

/// 注册表单状态
#[derive(Clone, Copy)]
struct RegisterForm {
    username: RwSignal<String>,
    email: RwSignal<String>,
    phone_number: RwSignal<String>,
    password: RwSignal<String>,
}

impl RegisterForm {
    fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone_number: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    fn to_request(self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.get_untracked(),
            password: self.password.get_untracked(),
            email: self.email.get_untracked(),
            phone_number: self.phone_number.get_untracked(),
        }
    }
}

#[component]
fn Field(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-control">
            <span class="label-text mb-1">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                class="input input-bordered"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                required=required
            />
        </label>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();
    let form = RegisterForm::new();

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
        let request = form.to_request();
        spawn_local(async move {
            let result = api.register(&request).await;
            set_is_submitting.set(false);
            match result {
                Ok(()) => router.navigate_with(
                    "/login",
                    NavState::Message(REGISTER_SUCCEEDED.to_string()),
                ),
                Err(e) => set_error_msg.set(Some(e.message_or(REGISTER_FAILED))),
            }
        });
    };

    view! {
        <div class="hero min-h-[calc(100vh-64px)]">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Create Account"</h1>
                    <p class="text-base-content/70 mt-2">"Join the campus lost & found community"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {move || error_msg.get().map(|message| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <AlertCircle attr:class="h-5 w-5" />
                                <span>{message}</span>
                            </div>
                        })}

                        <Field label="Username" input_type="text" placeholder="Choose a username" value=form.username required=true />
                        <Field label="Email" input_type="email" placeholder="name@example.com" value=form.email required=true />
                        <Field label="Phone Number" input_type="text" placeholder="e.g. 077 123 4567" value=form.phone_number />
                        <Field label="Password" input_type="password" placeholder="Choose a strong password" value=form.password required=true />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Creating Account..." } else { "Sign Up" }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2 text-base-content/70">
                            "Already have an account? "
                            <Link to="/login" class="link link-primary font-semibold">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
