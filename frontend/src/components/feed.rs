use crate::auth::{AuthContext, use_api, use_auth};
use crate::components::icons::{AlertCircle, Lock, SearchIcon, SearchX};
use crate::components::item_card::ItemCard;
use crate::components::modal::{ConfirmDialog, InfoDialog};
use crate::components::toast::{Notice, Toast};
use crate::web::route::AppRoute;
use crate::web::router::{Link, NavState, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use orbit::error::DELETE_ADVISORY;
use orbit::feed::load_feed;
use orbit::shared::{Item, ItemType};
use orbit::{ClientConfig, Feed, FeedLoad, FeedQuery, FeedState, ItemActions};

const REPORT_PUBLISHED: &str = "Your report has been published.";

fn heading(filter: Option<ItemType>) -> String {
    match filter {
        Some(t) => format!("{} Items", t.label()),
        None => "Recent Posts".to_string(),
    }
}

#[component]
fn FilterTabs(filter: Option<ItemType>) -> impl IntoView {
    let tabs = [
        (None, "All Items"),
        (Some(ItemType::Lost), "Lost Items"),
        (Some(ItemType::Found), "Found Items"),
    ];

    tabs.into_iter()
        .map(|(target, label)| {
            let class = if target == filter {
                "tab tab-active"
            } else {
                "tab"
            };
            view! {
                <Link to=AppRoute::search(target).to_url() class=class>{label}</Link>
            }
        })
        .collect_view()
}

#[component]
fn SignedOutPlaceholder() -> impl IntoView {
    view! {
        <div class="text-center py-24 px-4">
            <div class="w-20 h-20 mx-auto mb-6 rounded-full bg-primary/10 text-primary flex items-center justify-center">
                <Lock attr:class="h-10 w-10" />
            </div>
            <h2 class="text-2xl font-bold mb-3">"Login to View Items"</h2>
            <p class="text-base-content/60 max-w-md mx-auto mb-8 text-lg">
                "Join our community to see lost and found items, report something you've found, or search for what you've lost."
            </p>
            <div class="flex gap-3 justify-center">
                <Link to="/login" class="btn btn-primary">"Login"</Link>
                <Link to="/register" class="btn btn-outline">"Create Account"</Link>
            </div>
        </div>
    }
}

#[component]
pub fn FeedPage(filter: Option<ItemType>, fresh: bool) -> impl IntoView {
    let auth = use_auth();
    let api = StoredValue::new(use_api());
    let router = use_router();
    let config = expect_context::<ClientConfig>();

    let feed = RwSignal::new(Feed::new());
    let query = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(Option::<i64>::None);
    let contact = RwSignal::new(Option::<Item>::None);
    let error_modal = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(fresh.then(|| Notice::success(REPORT_PUBLISHED)));

    let is_authenticated = auth.is_authenticated_signal();
    let viewer = auth.session();

    // 每次查询都取新票据，旧请求的结果到达时会被丢弃
    let run_query = move |text: String| {
        let Some(ticket) = feed.try_update(Feed::begin) else {
            return;
        };
        let request = FeedQuery::new(filter).with_text(&text);
        let api = api.get_value();
        spawn_local(async move {
            match load_feed(&api, &AuthContext::store(), &request).await {
                Ok(FeedLoad::Items(items)) => feed.update(|f| {
                    f.complete(ticket, Ok(items));
                }),
                Ok(FeedLoad::Unauthenticated) => {}
                Err(e) => feed.update(|f| {
                    f.complete(ticket, Err(e));
                }),
            }
        });
    };

    Effect::new(move |_| {
        if is_authenticated.get() {
            run_query(query.get_untracked());
        }
    });

    let on_search_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run_query(query.get_untracked());
    };

    let search_term = Callback::new(move |term: String| {
        query.set(term.clone());
        run_query(term);
    });

    let clear_filters = move |_| {
        query.set(String::new());
        router.navigate(&AppRoute::search(None).to_url());
    };

    let confirm_delete = move |_: ()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_item(id).await {
                Ok(()) => feed.update(|f| {
                    f.remove(id);
                }),
                Err(e) => {
                    log::warn!("Delete of item {} failed: {}", id, e);
                    error_modal.set(Some(DELETE_ADVISORY.to_string()));
                }
            }
        });
    };

    let resolve = Callback::new(move |id: i64| {
        let api = api.get_value();
        spawn_local(async move {
            match api.resolve_item(id).await {
                Ok(()) => feed.update(|f| {
                    f.mark_resolved(id);
                }),
                Err(e) => error_modal.set(Some(e.update_advisory().to_string())),
            }
        });
    });

    let edit = Callback::new(move |item: Item| {
        router.navigate_with("/report", NavState::EditItem(item));
    });

    let ask_delete = Callback::new(move |id: i64| pending_delete.set(Some(id)));
    let show_contact = Callback::new(move |item: Item| contact.set(Some(item)));

    let placeholder = config.placeholder_image.clone();
    let image_base = config.clone();
    let render_items = move |items: Vec<Item>| {
        let session = viewer.get();
        items
            .into_iter()
            .map(|item| {
                let actions = ItemActions::for_viewer(session.as_ref(), &item);
                let image_url = image_base.image_url(item.id);
                view! {
                    <ItemCard
                        item=item
                        actions=actions
                        image_url=image_url
                        placeholder=placeholder.clone()
                        on_search=search_term
                        on_contact=show_contact
                        on_resolve=resolve
                        on_edit=edit
                        on_delete=ask_delete
                    />
                }
            })
            .collect_view()
    };

    let body = move || {
        if !is_authenticated.get() {
            return view! { <SignedOutPlaceholder /> }.into_any();
        }

        match feed.with(|f| f.state().clone()) {
            FeedState::Loading => view! {
                <div class="text-center py-20">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any(),
            FeedState::Error(message) => view! {
                <div role="alert" class="alert alert-error max-w-xl mx-auto">
                    <AlertCircle attr:class="h-6 w-6" />
                    <span>{message}</span>
                </div>
            }
            .into_any(),
            FeedState::Empty => {
                let filtered = FeedQuery::new(filter)
                    .with_text(&query.get_untracked())
                    .is_filtered();
                view! {
                    <div class="text-center py-20">
                        <SearchX attr:class="h-12 w-12 mx-auto text-base-content/30 mb-4" />
                        <h3 class="text-lg font-bold mb-1">"No items found"</h3>
                        <p class="text-sm text-base-content/60 mb-6 max-w-xs mx-auto">
                            "We couldn't find anything matching your criteria. Try adjusting your filters."
                        </p>
                        <Show when=move || filtered>
                            <button class="btn btn-ghost btn-sm text-primary" on:click=clear_filters>
                                "Clear all filters"
                            </button>
                        </Show>
                    </div>
                }
                .into_any()
            }
            FeedState::Loaded(items) => view! {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 items-start">
                    {render_items(items)}
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="w-full px-4 md:px-6 py-8">
            <Toast notice=notice millis=config.toast_millis />

            <div class="card bg-base-100 shadow-sm mb-8">
                <div class="card-body gap-6">
                    <div class="flex flex-col md:flex-row gap-6 md:items-center justify-between">
                        <div>
                            <h1 class="text-2xl font-bold">{heading(filter)}</h1>
                            <p class="text-sm text-base-content/60 mt-1">"Browse and find reported items"</p>
                        </div>
                        <form class="flex w-full md:w-auto gap-3" on:submit=on_search_submit>
                            <label class="input input-bordered flex items-center gap-2 flex-1 md:w-96">
                                <SearchIcon attr:class="h-5 w-5 opacity-50" />
                                <input
                                    type="text"
                                    class="grow"
                                    placeholder="Search items..."
                                    on:input=move |ev| query.set(event_target_value(&ev))
                                    prop:value=query
                                />
                            </label>
                            <button type="submit" class="btn btn-primary">"Search"</button>
                        </form>
                    </div>
                    <div role="tablist" class="tabs tabs-boxed w-fit">
                        <FilterTabs filter=filter />
                    </div>
                </div>
            </div>

            {body}

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete Item?"
                message="Are you sure you want to delete this item? This action cannot be undone."
                confirm_label="Delete"
                danger=true
                on_confirm=confirm_delete
                on_cancel=move |_: ()| pending_delete.set(None)
            />

            <InfoDialog
                open=Signal::derive(move || contact.with(Option::is_some))
                title=Signal::derive(move || {
                    contact.with(|c| c.as_ref().map(|i| format!("Contact Owner: {}", i.title)).unwrap_or_default())
                })
                message=Signal::derive(move || {
                    contact.with(|c| c.as_ref().map(Item::contact_line).unwrap_or_default())
                })
                on_close=move |_: ()| contact.set(None)
            />

            <InfoDialog
                open=Signal::derive(move || error_modal.with(Option::is_some))
                title=Signal::derive(|| "Error".to_string())
                message=Signal::derive(move || error_modal.get().unwrap_or_default())
                on_close=move |_: ()| error_modal.set(None)
            />
        </div>
    }
}
