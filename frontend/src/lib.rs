//! Orbit 前端应用
//!
//! 采用 Context-Driven 架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话上下文与 API 客户端
//! - `components`: 页面与 UI 组件

mod auth;
mod components {
    pub mod about;
    pub mod feed;
    mod icons;
    mod item_card;
    pub mod landing;
    pub mod login;
    mod modal;
    pub mod navbar;
    pub mod register;
    pub mod report;
    mod report_form;
    mod toast;
}
pub mod web;

use crate::auth::{AuthContext, build_api};
use crate::components::about::AboutPage;
use crate::components::feed::FeedPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::navbar::NavBar;
use crate::components::register::RegisterPage;
use crate::components::report::ReportPage;

use leptos::prelude::*;
use orbit::ClientConfig;
use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Search { filter, fresh } => {
            view! { <FeedPage filter=filter fresh=fresh /> }.into_any()
        }
        AppRoute::Report { kind } => view! { <ReportPage kind=kind /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[70vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-primary">"404"</h1>
                    <p class="text-xl mt-4 text-base-content/70">"Page not found"</p>
                    <Link to="/" class="btn btn-primary mt-6">"Back to Home"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // 1. 会话上下文（从 LocalStorage 恢复）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. API 客户端与配置
    provide_context(build_api(config.clone()));
    provide_context(config);

    // 3. 认证信号注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen bg-base-200 font-sans">
                <NavBar />
                <main>
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
        </Router>
    }
}
