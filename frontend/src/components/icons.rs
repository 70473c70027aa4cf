//! 内联 SVG 图标（描边风格，24x24）
//!
//! 通过 `attr:class` 控制尺寸和颜色。

use leptos::prelude::*;

macro_rules! stroke_icon {
    ($name:ident, $($body:tt)*) => {
        #[component]
        pub fn $name() -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    $($body)*
                </svg>
            }
        }
    };
}

stroke_icon!(SearchIcon, <circle cx="11" cy="11" r="8" /> <path d="m21 21-4.3-4.3" />);
stroke_icon!(MapPin, <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" /> <circle cx="12" cy="10" r="3" />);
stroke_icon!(CalendarIcon, <rect width="18" height="18" x="3" y="4" rx="2" /> <path d="M16 2v4M8 2v4M3 10h18" />);
stroke_icon!(Tag, <path d="M12 2H2v10l9.29 9.29a1 1 0 0 0 1.41 0l8.59-8.59a1 1 0 0 0 0-1.41Z" /> <circle cx="7" cy="7" r="1.5" />);
stroke_icon!(Trash, <path d="M3 6h18M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" />);
stroke_icon!(Pencil, <path d="M17 3a2.85 2.85 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z" />);
stroke_icon!(CheckCircle, <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" /> <path d="m9 11 3 3L22 4" />);
stroke_icon!(AlertCircle, <circle cx="12" cy="12" r="10" /> <path d="M12 8v4M12 16h.01" />);
stroke_icon!(Lock, <rect width="18" height="11" x="3" y="11" rx="2" /> <path d="M7 11V7a5 5 0 0 1 10 0v4" />);
stroke_icon!(LogOut, <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4M16 17l5-5-5-5M21 12H9" />);
stroke_icon!(MenuIcon, <path d="M4 6h16M4 12h16M4 18h16" />);
stroke_icon!(Close, <path d="M18 6 6 18M6 6l12 12" />);
stroke_icon!(Upload, <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M17 8l-5-5-5 5M12 3v12" />);
stroke_icon!(Phone, <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92Z" />);
stroke_icon!(ShieldCheck, <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10Z" /> <path d="m9 12 2 2 4-4" />);
stroke_icon!(SearchX, <circle cx="11" cy="11" r="8" /> <path d="m21 21-4.3-4.3M13.5 8.5l-5 5M8.5 8.5l5 5" />);
stroke_icon!(Users, <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" /> <circle cx="9" cy="7" r="4" /> <path d="M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75" />);
stroke_icon!(Globe, <circle cx="12" cy="12" r="10" /> <path d="M2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10Z" />);
