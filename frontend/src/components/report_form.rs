//! 报告表单
//!
//! `ReportForm` 把零散的 signal 整合在一起，负责与 `ItemDraft` 之间的转换；
//! 下面的组件只做输入渲染。

use crate::components::icons::{MapPin, SearchIcon};
use leptos::prelude::*;
use orbit::ItemDraft;
use orbit::shared::ItemType;

/// 使用 `RwSignal` 因为它实现了 `Copy`，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct ReportForm {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub item_type: RwSignal<ItemType>,
    pub category: RwSignal<String>,
    pub location: RwSignal<String>,
    pub date: RwSignal<String>,
    pub contact_info: RwSignal<String>,
}

impl ReportForm {
    pub fn from_draft(draft: ItemDraft) -> Self {
        Self {
            title: RwSignal::new(draft.title),
            description: RwSignal::new(draft.description),
            item_type: RwSignal::new(draft.item_type),
            category: RwSignal::new(draft.category),
            location: RwSignal::new(draft.location),
            date: RwSignal::new(draft.date),
            contact_info: RwSignal::new(draft.contact_info),
        }
    }

    pub fn to_draft(self) -> ItemDraft {
        ItemDraft {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            item_type: self.item_type.get_untracked(),
            category: self.category.get_untracked(),
            location: self.location.get_untracked(),
            date: self.date.get_untracked(),
            contact_info: self.contact_info.get_untracked(),
        }
    }
}

#[component]
fn TypeCard(form: ReportForm, kind: ItemType, label: &'static str) -> impl IntoView {
    let selected = move || form.item_type.get() == kind;
    let active = match kind {
        ItemType::Lost => "border-error bg-error/10 text-error ring-2 ring-error/20",
        ItemType::Found => "border-success bg-success/10 text-success ring-2 ring-success/20",
    };

    view! {
        <button
            type="button"
            class=move || {
                let state = if selected() {
                    active
                } else {
                    "border-base-300 bg-base-200 text-base-content/50 hover:border-base-content/20"
                };
                format!("flex flex-col items-center gap-2 p-4 rounded-xl border-2 transition-all {}", state)
            }
            on:click=move |_| form.item_type.set(kind)
        >
            {match kind {
                ItemType::Lost => view! { <SearchIcon attr:class="h-6 w-6" /> }.into_any(),
                ItemType::Found => view! { <MapPin attr:class="h-6 w-6" /> }.into_any(),
            }}
            <span class="font-bold text-sm">{label}</span>
        </button>
    }
}

#[component]
fn TextInput(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-control w-full">
            <span class="label-text mb-1.5">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                class="input input-bordered w-full"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                required
            />
        </label>
    }
}

/// 物品基本信息（类型、标题、描述、分类、日期、地点）
#[component]
pub fn DetailsSection(form: ReportForm) -> impl IntoView {
    view! {
        <div class="space-y-5">
            <div>
                <span class="label-text block mb-1.5">"Classification"</span>
                <div class="grid grid-cols-2 gap-4">
                    <TypeCard form=form kind=ItemType::Lost label="I Lost Something" />
                    <TypeCard form=form kind=ItemType::Found label="I Found Something" />
                </div>
            </div>

            <TextInput label="Title" placeholder="e.g. Blue Wallet" value=form.title />

            <label class="form-control w-full">
                <span class="label-text mb-1.5">"Description"</span>
                <textarea
                    rows="4"
                    placeholder="Describe the item clearly..."
                    class="textarea textarea-bordered w-full"
                    on:input=move |ev| form.description.set(event_target_value(&ev))
                    prop:value=move || form.description.get()
                    required
                ></textarea>
            </label>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                <TextInput label="Category" placeholder="e.g. Electronics" value=form.category />
                <TextInput label="Date" placeholder="" value=form.date input_type="date" />
            </div>

            <TextInput label="Location" placeholder="e.g. Library 2nd Floor" value=form.location />
        </div>
    }
}

#[component]
pub fn ContactSection(form: ReportForm) -> impl IntoView {
    view! {
        <input
            type="text"
            placeholder="e.g. +94 77 123 4567"
            class="input input-bordered w-full"
            on:input=move |ev| form.contact_info.set(event_target_value(&ev))
            prop:value=move || form.contact_info.get()
        />
        <p class="text-xs text-base-content/60 mt-3 bg-base-200 p-3 rounded-lg">
            <strong>"Note: "</strong>
            "Your registered email is visible to others by default. Providing a mobile number helps speed up recovery."
        </p>
    }
}
