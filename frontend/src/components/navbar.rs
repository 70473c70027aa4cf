use crate::auth::{confirm_logout, use_auth};
use crate::components::icons::{Close, LogOut, MenuIcon};
use crate::components::modal::ConfirmDialog;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use orbit::auth::LogoutPhase;

const LINKS: [(&str, &str); 3] = [("/", "Home"), ("/search", "Search"), ("/about", "About")];

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let menu_open = RwSignal::new(false);
    let phase = RwSignal::new(LogoutPhase::default());

    let is_authenticated = auth.is_authenticated_signal();
    let username = auth.username();
    let close_menu = Callback::new(move |_: ()| menu_open.set(false));

    let on_confirm = move |_: ()| {
        if confirm_logout(auth, phase) {
            menu_open.set(false);
            router.navigate("/login");
        }
    };

    let links = move || {
        LINKS
            .iter()
            .map(|(to, label)| {
                view! {
                    <li>
                        <Link to=*to on_navigate=close_menu>{*label}</Link>
                    </li>
                }
            })
            .collect_view()
    };

    let account = move || {
        if is_authenticated.get() {
            view! {
                <Link to="/report" class="btn btn-primary btn-sm" on_navigate=close_menu>
                    "Post Item"
                </Link>
                <span class="font-semibold text-sm px-2">{move || username.get().unwrap_or_default()}</span>
                <button
                    class="btn btn-ghost btn-sm btn-circle"
                    title="Sign out"
                    on:click=move |_| phase.update(LogoutPhase::request)
                >
                    <LogOut attr:class="h-5 w-5" />
                </button>
            }
            .into_any()
        } else {
            view! {
                <Link to="/login" class="btn btn-primary btn-sm" on_navigate=close_menu>
                    "Login"
                </Link>
            }
            .into_any()
        }
    };

    view! {
        <nav class="navbar bg-base-100 shadow-sm sticky top-0 z-40 px-4 md:px-8">
            <div class="flex-1">
                <Link to="/" class="text-2xl font-extrabold tracking-tight text-primary">
                    "Orbit"
                </Link>
            </div>

            <div class="hidden md:flex flex-none items-center gap-2">
                <ul class="menu menu-horizontal px-1">{links}</ul>
                {account}
            </div>

            <div class="md:hidden flex-none">
                <button class="btn btn-ghost btn-square" on:click=move |_| menu_open.update(|o| *o = !*o)>
                    {move || if menu_open.get() {
                        view! { <Close attr:class="h-6 w-6" /> }.into_any()
                    } else {
                        view! { <MenuIcon attr:class="h-6 w-6" /> }.into_any()
                    }}
                </button>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="md:hidden bg-base-100 shadow-md px-4 pb-4">
                <ul class="menu">{links}</ul>
                <div class="flex items-center gap-2 px-4">{account}</div>
            </div>
        </Show>

        <ConfirmDialog
            open=Signal::derive(move || phase.with(LogoutPhase::is_confirming))
            title="Sign Out?"
            message="Are you sure you want to sign out of your account?"
            confirm_label="Sign Out"
            danger=true
            on_confirm=on_confirm
            on_cancel=move |_: ()| phase.update(LogoutPhase::cancel)
        />
    }
}
