//! 认证模块
//!
//! 管理用户会话，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::web::{BrowserSessionStore, FetchClient};
use leptos::prelude::*;
use orbit::auth::LogoutPhase;
use orbit::shared::Session;
use orbit::{AuthError, ClientConfig, OrbitApi, SessionStore, WithCredentials};

/// 带凭据注入的浏览器客户端
pub type AppApi = OrbitApi<WithCredentials<FetchClient, BrowserSessionStore>>;

pub fn build_api(config: ClientConfig) -> AppApi {
    OrbitApi::new(
        config,
        WithCredentials::new(FetchClient, BrowserSessionStore::default()),
    )
}

pub fn use_api() -> AppApi {
    expect_context::<AppApi>()
}

/// 认证上下文
///
/// 会话的响应式镜像，持久化仍由 `BrowserSessionStore` 负责。
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// 从 LocalStorage 恢复会话
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Self::store().get()),
        }
    }

    pub fn store() -> BrowserSessionStore {
        BrowserSessionStore::default()
    }

    pub fn session(&self) -> Signal<Option<Session>> {
        self.session.into()
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Option::is_some))
    }

    pub fn username(&self) -> Signal<Option<String>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.as_ref().map(|s| s.username.clone())))
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// 登录成功后持久化并广播会话
pub async fn login(
    ctx: AuthContext,
    api: &AppApi,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    let session = orbit::auth::login(api, &AuthContext::store(), username, password).await?;
    ctx.session.set(Some(session));
    Ok(())
}

/// 确认登出；只有在确认状态下才会清除会话
pub fn confirm_logout(ctx: AuthContext, phase: RwSignal<LogoutPhase>) -> bool {
    let signed_out = phase
        .try_update(|p| p.confirm(&AuthContext::store()))
        .unwrap_or(false);
    if signed_out {
        ctx.session.set(None);
    }
    signed_out
}
