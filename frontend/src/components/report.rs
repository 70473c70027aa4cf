use crate::auth::use_api;
use crate::components::icons::Upload;
use crate::components::report_form::{ContactSection, DetailsSection, ReportForm};
use crate::components::toast::{Notice, Toast};
use crate::web::file::{object_url, read_file_part, revoke_object_url};
use crate::web::route::AppRoute;
use crate::web::router::{NavState, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use orbit::report::{IMAGE_FIELD, submit_report};
use orbit::shared::ItemType;
use orbit::{ApiError, ClientConfig, ReportError, ReportMode, ReportPhase};
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn ReportPage(kind: Option<ItemType>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let router = use_router();
    let config = expect_context::<ClientConfig>();

    // 通过导航状态传入物品时进入编辑模式
    let mode = match router.take_state() {
        Some(NavState::EditItem(item)) => ReportMode::Edit(item),
        _ => ReportMode::Create,
    };
    let form = ReportForm::from_draft(mode.initial_draft(kind));
    let heading = mode.heading();
    let submit_label = if mode.is_edit() {
        "Save Changes"
    } else {
        "Submit Report"
    };

    let image = RwSignal::new_local(None::<File>);
    let preview = RwSignal::new(mode.existing_image(&config));
    // 只回收自己创建的 object URL
    let local_preview = StoredValue::new(None::<String>);
    let phase = RwSignal::new(ReportPhase::Idle);
    let notice = RwSignal::new(None::<Notice>);
    let mode = StoredValue::new(mode);

    let replace_local_preview = move |next: Option<String>| {
        if let Some(old) = local_preview.get_value() {
            revoke_object_url(&old);
        }
        local_preview.set_value(next);
    };
    on_cleanup(move || replace_local_preview(None));

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let url = object_url(&file);
        replace_local_preview(url.clone());
        if url.is_some() {
            preview.set(url);
        }
        image.set(Some(file));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() == ReportPhase::Submitting {
            return;
        }

        let draft = form.to_draft();
        if let Err(e) = draft.validate() {
            notice.set(Some(Notice::error(e.to_string())));
            return;
        }

        phase.set(ReportPhase::Submitting);
        let file = image.get_untracked();
        let api = api.get_value();
        let mode = mode.get_value();
        spawn_local(async move {
            let attachment = match file {
                Some(file) => read_file_part(&file, IMAGE_FIELD)
                    .await
                    .map(Some)
                    .map_err(|e| ReportError::Api(ApiError::Transport(e))),
                None => Ok(None),
            };

            let result = match attachment {
                Ok(part) => submit_report(&api, &mode, &draft, part).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(_) => {
                    phase.set(ReportPhase::Idle);
                    router.navigate(
                        &AppRoute::Search {
                            filter: None,
                            fresh: true,
                        }
                        .to_url(),
                    );
                }
                Err(e) => {
                    log::warn!("Report submission failed: {}", e);
                    let toast = e.toast();
                    notice.set(Some(Notice::error(toast.clone())));
                    phase.set(ReportPhase::Error(toast));
                }
            }
        });
    };

    let is_submitting = move || phase.get() == ReportPhase::Submitting;

    view! {
        <div class="max-w-6xl mx-auto px-4 py-10">
            <Toast notice=notice millis=config.toast_millis />

            <div class="mb-8">
                <h1 class="text-3xl font-bold">{heading}</h1>
                <p class="text-base-content/60 mt-2">"Help us track items across the campus."</p>
            </div>

            <form class="grid grid-cols-1 lg:grid-cols-3 gap-8" on:submit=on_submit>
                <div class="lg:col-span-2 card bg-base-100 shadow-sm">
                    <div class="card-body">
                        <h2 class="text-lg font-bold mb-4">"Item Details"</h2>
                        <DetailsSection form=form />
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="card bg-base-100 shadow-sm">
                        <div class="card-body">
                            <h2 class="text-lg font-bold mb-4">"Photo Proof"</h2>
                            <label class="relative flex flex-col items-center justify-center w-full aspect-square border-2 border-dashed border-base-300 rounded-2xl cursor-pointer overflow-hidden hover:border-primary/50">
                                {move || match preview.get() {
                                    Some(src) => view! {
                                        <img src=src alt="Preview" class="absolute inset-0 w-full h-full object-cover" />
                                        <span class="relative text-sm font-bold bg-base-content/50 text-base-100 px-4 py-2 rounded-full">
                                            "Change"
                                        </span>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <Upload attr:class="h-8 w-8 text-base-content/40 mb-2" />
                                        <p class="text-sm font-medium text-base-content/70">"Upload Image"</p>
                                        <p class="text-xs mt-1 text-base-content/50">"PNG, JPG up to 5MB"</p>
                                    }
                                    .into_any(),
                                }}
                                <input type="file" accept="image/*" class="hidden" on:change=on_file_change />
                            </label>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-sm">
                        <div class="card-body">
                            <h2 class="text-lg font-bold mb-4">"Contact Information"</h2>
                            <ContactSection form=form />
                        </div>
                    </div>

                    <button type="submit" class="btn btn-primary btn-lg w-full" disabled=is_submitting>
                        {move || if is_submitting() {
                            view! { <span class="loading loading-spinner"></span> }.into_any()
                        } else {
                            submit_label.into_any()
                        }}
                    </button>
                    {move || match phase.get() {
                        ReportPhase::Error(message) => Some(view! {
                            <p role="alert" class="text-sm text-error text-center">{message}</p>
                        }),
                        _ => None,
                    }}
                </div>
            </form>
        </div>
    }
}
