use crate::components::icons::{MapPin, SearchIcon, Users};
use crate::web::router::Link;
use leptos::prelude::*;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center bg-base-100 border-t border-base-300 py-8 text-base-content/50 text-sm">
            <p>"© " {current_year()} " University of Vavuniya. All rights reserved."</p>
        </footer>
    }
}

#[component]
fn Feature(title: &'static str, text: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-sm border border-base-300 hover:shadow-md transition-shadow">
            <div class="card-body">
                <div class="w-14 h-14 bg-primary/10 text-primary rounded-xl flex items-center justify-center mb-2">
                    {children()}
                </div>
                <h3 class="card-title">{title}</h3>
                <p class="text-sm text-base-content/60">{text}</p>
            </div>
        </div>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-[calc(100vh-64px)]">
            <section class="hero bg-base-100 py-20 lg:py-28">
                <div class="hero-content text-center">
                    <div class="max-w-3xl">
                        <h1 class="text-4xl md:text-6xl font-bold leading-tight mb-6">
                            "University of Vavuniya" <br />
                            <span class="text-primary">"Lost & Found"</span>
                        </h1>
                        <p class="text-lg md:text-xl text-base-content/60 mb-10">
                            "The official platform for students and staff to report and recover lost items within the campus premises."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <Link to="/report?type=LOST" class="btn btn-primary btn-lg gap-2">
                                <SearchIcon attr:class="h-5 w-5" />
                                "I Lost Something"
                            </Link>
                            <Link to="/report?type=FOUND" class="btn btn-outline btn-primary btn-lg gap-2">
                                <MapPin attr:class="h-5 w-5" />
                                "I Found Something"
                            </Link>
                        </div>
                    </div>
                </div>
            </section>

            <section class="py-24 flex-1">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="text-center mb-16">
                        <h2 class="text-2xl font-bold mb-3">"Community Driven Recovery"</h2>
                        <p class="text-base-content/60">"A simple process to help return items to their owners."</p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <Feature title="Search" text="Browse through the list of found items or report what you've lost.">
                            <SearchIcon attr:class="h-7 w-7" />
                        </Feature>
                        <Feature title="Identify" text="Use location tags to specify where items were lost or found on campus.">
                            <MapPin attr:class="h-7 w-7" />
                        </Feature>
                        <Feature title="Connect" text="Directly contact the person to arrange the return of the item.">
                            <Users attr:class="h-7 w-7" />
                        </Feature>
                    </div>
                </div>
            </section>

            <Footer />
        </div>
    }
}
