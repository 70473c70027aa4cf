//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use orbit::shared::ItemType;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页
    #[default]
    Landing,
    Login,
    Register,
    /// 物品列表；`fresh` 表示刚发布成功 (`?new=true`)
    Search {
        filter: Option<ItemType>,
        fresh: bool,
    },
    /// 发布/编辑物品 (需要认证)
    Report { kind: Option<ItemType> },
    About,
    /// 页面未找到
    NotFound,
}

/// 取查询串中某个参数的值
fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

impl AppRoute {
    /// 将 URL（path + 可选查询串）解析为路由枚举
    pub fn from_url(url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        let kind = query_param(query, "type").and_then(ItemType::parse);

        match path {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/search" => Self::Search {
                filter: kind,
                fresh: query_param(query, "new") == Some("true"),
            },
            "/report" => Self::Report { kind },
            "/about" => Self::About,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL
    pub fn to_url(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Search { filter, fresh } => {
                let mut params = Vec::new();
                if let Some(t) = filter {
                    params.push(format!("type={}", t.as_str()));
                }
                if *fresh {
                    params.push("new=true".to_string());
                }
                if params.is_empty() {
                    "/search".to_string()
                } else {
                    format!("/search?{}", params.join("&"))
                }
            }
            Self::Report { kind: Some(t) } => format!("/report?type={}", t.as_str()),
            Self::Report { kind: None } => "/report".to_string(),
            Self::About => "/about".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    ///
    /// 列表页未登录时展示占位内容，不在这里拦截。
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Report { .. })
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn search(filter: Option<ItemType>) -> Self {
        Self::Search {
            filter,
            fresh: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(AppRoute::from_url("/"), AppRoute::Landing);
        assert_eq!(AppRoute::from_url("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_url("/register/"), AppRoute::Register);
        assert_eq!(AppRoute::from_url("/about"), AppRoute::About);
        assert_eq!(AppRoute::from_url("/items/3"), AppRoute::NotFound);
    }

    #[test]
    fn test_search_query() {
        assert_eq!(
            AppRoute::from_url("/search?type=FOUND&new=true"),
            AppRoute::Search {
                filter: Some(ItemType::Found),
                fresh: true,
            }
        );
        assert_eq!(AppRoute::from_url("/search?type=bogus"), AppRoute::search(None));
    }

    #[test]
    fn test_report_kind() {
        assert_eq!(
            AppRoute::from_url("/report?type=LOST"),
            AppRoute::Report {
                kind: Some(ItemType::Lost)
            }
        );
        assert!(AppRoute::from_url("/report").requires_auth());
        assert!(!AppRoute::search(None).requires_auth());
    }

    #[test]
    fn test_url_roundtrip_for_links() {
        let route = AppRoute::Search {
            filter: Some(ItemType::Lost),
            fresh: true,
        };
        assert_eq!(route.to_url(), "/search?type=LOST&new=true");
        assert_eq!(AppRoute::from_url(&route.to_url()), route);
    }
}
