use crate::components::icons::{CalendarIcon, CheckCircle, MapPin, Pencil, Phone, Tag, Trash};
use leptos::prelude::*;
use orbit::ItemActions;
use orbit::shared::{Item, ItemType};

/// 单个物品卡片
///
/// 图片加载失败时只切换一次到占位图，不提示错误。
#[component]
pub fn ItemCard(
    item: Item,
    actions: ItemActions,
    image_url: String,
    placeholder: String,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] on_contact: Callback<Item>,
    #[prop(into)] on_resolve: Callback<i64>,
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let src = RwSignal::new(image_url);
    let fell_back = RwSignal::new(false);
    let on_image_error = move |_| {
        if !fell_back.get_untracked() {
            fell_back.set(true);
            src.set(placeholder.clone());
        }
    };

    let id = item.id;
    let resolved = item.is_resolved();
    let badge_class = match item.item_type {
        ItemType::Lost => "badge badge-error badge-outline badge-sm font-bold",
        ItemType::Found => "badge badge-success badge-outline badge-sm font-bold",
    };
    let initial = item
        .user
        .username
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?');

    let category = item.category.clone();
    let location = item.location.clone();
    let for_contact = item.clone();
    let for_edit = item.clone();

    view! {
        <div class="card card-compact bg-base-100 shadow-sm border border-base-300 hover:shadow-md transition-shadow overflow-hidden">
            <figure class="relative h-44 bg-base-200">
                <img
                    src=move || src.get()
                    alt=item.title.clone()
                    class="w-full h-full object-cover"
                    class:grayscale=resolved
                    on:error=on_image_error
                />
                {resolved.then(|| view! {
                    <div class="absolute inset-0 bg-base-content/40 flex items-center justify-center">
                        <span class="badge badge-lg bg-base-100 font-bold tracking-widest">"RESOLVED"</span>
                    </div>
                })}
                {item.type_badge().map(|label| view! {
                    <span class=format!("absolute top-3 right-3 {}", badge_class)>{label}</span>
                })}
            </figure>

            <div class="card-body">
                <h3 class="card-title text-base line-clamp-1">{item.title.clone()}</h3>
                <p class="text-xs text-base-content/60 line-clamp-2 min-h-8">{item.description.clone()}</p>

                <div class="flex flex-wrap gap-1.5">
                    {(!category.is_empty()).then(|| {
                        let term = category.clone();
                        view! {
                            <button class="badge badge-ghost badge-sm gap-1 hover:badge-primary" on:click=move |_| on_search.run(term.clone())>
                                <Tag attr:class="h-3 w-3" /> {category}
                            </button>
                        }
                    })}
                    {(!location.is_empty()).then(|| {
                        let term = location.clone();
                        view! {
                            <button class="badge badge-ghost badge-sm gap-1 hover:badge-primary" on:click=move |_| on_search.run(term.clone())>
                                <MapPin attr:class="h-3 w-3" /> {location}
                            </button>
                        }
                    })}
                    {item.date.map(|_| view! {
                        <span class="badge badge-ghost badge-sm gap-1">
                            <CalendarIcon attr:class="h-3 w-3" /> {item.date_label()}
                        </span>
                    })}
                </div>

                <div class="card-actions items-center justify-between mt-2 pt-3 border-t border-base-200">
                    <div class="flex items-center gap-1.5">
                        <div class="avatar placeholder">
                            <div class="bg-primary/10 text-primary rounded-full w-6">
                                <span class="text-xs font-bold">{initial.to_string()}</span>
                            </div>
                        </div>
                        <span class="text-xs text-base-content/60 truncate max-w-20">{item.user.username.clone()}</span>
                    </div>

                    <div class="flex items-center gap-1">
                        {actions.resolve.then(|| view! {
                            <button class="btn btn-ghost btn-xs btn-square text-success" title="Mark as Resolved" on:click=move |_| on_resolve.run(id)>
                                <CheckCircle attr:class="h-4 w-4" />
                            </button>
                        })}
                        {actions.edit.then(|| view! {
                            <button class="btn btn-ghost btn-xs btn-square" title="Edit" on:click=move |_| on_edit.run(for_edit.clone())>
                                <Pencil attr:class="h-4 w-4" />
                            </button>
                        })}
                        {actions.delete.then(|| view! {
                            <button class="btn btn-ghost btn-xs btn-square text-error" title="Delete" on:click=move |_| on_delete.run(id)>
                                <Trash attr:class="h-4 w-4" />
                            </button>
                        })}
                        {actions.contact.then(|| view! {
                            <button class="btn btn-primary btn-xs gap-1" on:click=move |_| on_contact.run(for_contact.clone())>
                                <Phone attr:class="h-3 w-3" /> "Contact"
                            </button>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
