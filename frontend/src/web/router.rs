//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。

use leptos::prelude::*;
use orbit::auth::LOGIN_REQUIRED_TO_REPORT;
use orbit::shared::Item;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 随导航一起传递、只读取一次的页面状态
#[derive(Debug, Clone, PartialEq)]
pub enum NavState {
    /// 登录页顶部的提示信息
    Message(String),
    /// 进入编辑模式的物品
    EditItem(Item),
}

/// 获取当前浏览器路径（含查询串）
fn current_url() -> String {
    web_sys::window()
        .map(|w| {
            let location = w.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            format!("{}{}", path, search)
        })
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }
}

/// 用于重定向
fn replace_history_state(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: RwSignal<AppRoute>,
    nav_state: RwSignal<Option<NavState>>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let router = Self {
            current_route: RwSignal::new(AppRoute::from_url(&current_url())),
            nav_state: RwSignal::new(None),
            is_authenticated,
        };

        // 直接打开受保护的地址时同样执行守卫
        let initial = router.current_route.get_untracked();
        if initial.requires_auth() && !is_authenticated.get_untracked() {
            router.deny(false);
        }
        router
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> Signal<AppRoute> {
        self.current_route.into()
    }

    pub fn navigate(&self, url: &str) {
        self.navigate_to_route(AppRoute::from_url(url), None);
    }

    pub fn navigate_with(&self, url: &str, state: NavState) {
        self.navigate_to_route(AppRoute::from_url(url), Some(state));
    }

    /// 取出导航状态，取出后即清空
    pub fn take_state(&self) -> Option<NavState> {
        let mut taken = None;
        self.nav_state.update_untracked(|state| taken = state.take());
        taken
    }

    /// 拒绝访问：带着提示信息跳转到登录页
    fn deny(&self, use_push: bool) {
        log::info!("Access denied, redirecting to login");
        let redirect = AppRoute::auth_failure_redirect();
        if use_push {
            push_history_state(&redirect.to_url());
        } else {
            replace_history_state(&redirect.to_url());
        }
        self.nav_state
            .set(Some(NavState::Message(LOGIN_REQUIRED_TO_REPORT.to_string())));
        self.current_route.set(redirect);
    }

    fn navigate_to_route(&self, target: AppRoute, state: Option<NavState>) {
        // --- Step 1: 验证目标路由 ---
        if target.requires_auth() && !self.is_authenticated.get_untracked() {
            self.deny(true);
            return;
        }

        // --- Step 2: 加载页面 (更新状态) ---
        push_history_state(&target.to_url());
        self.nav_state.set(state);
        self.current_route.set(target);
        scroll_to_top();
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_url(&current_url());
            if target.requires_auth() && !router.is_authenticated.get_untracked() {
                router.deny(false);
            } else {
                router.nav_state.set(None);
                router.current_route.set(target);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 登出时离开受保护页面
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            if !is_auth && router.current_route.get_untracked().requires_auth() {
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(&redirect.to_url());
                router.current_route.set(redirect);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || matcher(router.current_route().get())
}

/// 站内链接，拦截点击改走 History API
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    /// 点击后的额外动作（如收起移动端菜单）
    #[prop(optional, into)]
    on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
        if let Some(cb) = on_navigate {
            cb.run(());
        }
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
