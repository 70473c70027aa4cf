use crate::components::icons::{Globe, MapPin, Phone, ShieldCheck, Users};
use crate::components::landing::Footer;
use leptos::prelude::*;

const PROTOCOL: [&str; 3] = [
    "If you find a valuable item (wallet, phone, ID, laptop), please list it on Orbit immediately.",
    "If the owner does not contact you within 24 hours, the item must be handed over to the University Security Office.",
    "For Student IDs found during exams, please hand them over to the nearest Examination Supervisor.",
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let steps = PROTOCOL
        .iter()
        .enumerate()
        .map(|(i, step)| {
            view! {
                <li class="flex gap-4">
                    <span class="w-8 h-8 rounded-full bg-primary-content/10 flex items-center justify-center shrink-0 font-bold text-sm">
                        {i + 1}
                    </span>
                    <p>{*step}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col min-h-[calc(100vh-64px)]">
            <section class="bg-base-100 py-20 text-center px-4">
                <h1 class="text-4xl md:text-5xl font-bold mb-6">
                    "About " <span class="text-primary">"Orbit"</span>
                </h1>
                <p class="text-xl text-base-content/60 max-w-2xl mx-auto">
                    "The official digital lost and found platform for the "
                    <span class="font-semibold text-base-content">"University of Vavuniya"</span> "."
                </p>
            </section>

            <div class="max-w-5xl mx-auto px-4 py-16 space-y-16 flex-1">
                <section class="card bg-base-100 shadow-sm">
                    <div class="card-body md:flex-row gap-6">
                        <div class="w-14 h-14 bg-primary/10 text-primary rounded-xl flex items-center justify-center shrink-0">
                            <Globe attr:class="h-7 w-7" />
                        </div>
                        <div>
                            <h2 class="text-2xl font-bold mb-4">"Our Mission"</h2>
                            <p class="text-lg text-base-content/70">
                                "To create a safe, efficient, and centralized community space where students, faculty, and staff can collaboratively recover lost belongings. We aim to replace fragmented social media posts with a dedicated, privacy-focused solution tailored specifically for our campus environment."
                            </p>
                        </div>
                    </div>
                </section>

                <section>
                    <h2 class="text-2xl font-bold mb-8">"Why We Built This"</h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        <div class="card bg-base-100 shadow-sm p-6">
                            <Users attr:class="h-5 w-5 text-primary mb-4" />
                            <h3 class="text-lg font-bold mb-2">"Community First"</h3>
                            <p class="text-sm text-base-content/60">
                                "Fostering a culture of honesty and helpfulness among the student body and staff members."
                            </p>
                        </div>
                        <div class="card bg-base-100 shadow-sm p-6">
                            <ShieldCheck attr:class="h-5 w-5 text-primary mb-4" />
                            <h3 class="text-lg font-bold mb-2">"Trust & Privacy"</h3>
                            <p class="text-sm text-base-content/60">
                                "A secure environment where contact details are shared only when necessary for item recovery."
                            </p>
                        </div>
                        <div class="card bg-base-100 shadow-sm p-6">
                            <MapPin attr:class="h-5 w-5 text-primary mb-4" />
                            <h3 class="text-lg font-bold mb-2">"Campus Specific"</h3>
                            <p class="text-sm text-base-content/60">
                                "Categories and locations are customized to the University of Vavuniya's buildings and lecture halls."
                            </p>
                        </div>
                    </div>
                </section>

                <section class="rounded-3xl bg-primary text-primary-content p-8 md:p-12">
                    <h2 class="text-2xl font-bold mb-8">"University Recovery Protocol"</h2>
                    <ol class="space-y-6">{steps}</ol>
                    <div class="mt-8 pt-8 border-t border-primary-content/10 flex flex-col md:flex-row md:items-center justify-between gap-4">
                        <p class="text-sm opacity-70">"This platform is a project by the Faculty of Technological Studies."</p>
                        <div class="flex items-center gap-2 text-sm font-semibold bg-primary-content/10 px-4 py-2 rounded-lg">
                            <Phone attr:class="h-4 w-4" />
                            "Security Unit: +94 24 222 3316"
                        </div>
                    </div>
                </section>
            </div>

            <Footer />
        </div>
    }
}
