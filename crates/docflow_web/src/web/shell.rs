use chrono::Local;
use docflow::categories::CategoryFlags;
use docflow::document::{Document, DocumentId, IncomingFile};
use docflow::notify::Toast;
use leptos::prelude::*;

use super::files;
use crate::ui_model::{document_item_class, format_upload_date, CategoryCheckbox, UserMenuItem};

#[component]
pub(super) fn ToastStack(toasts: Signal<Vec<Toast>>, on_dismiss: Callback<u64>) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                <div class=toast.level.css_class() role="status">
                    <p class="toast-message">{toast.message}</p>
                    <button
                        class="toast-close"
                        title="Закрыть"
                        on:click=move |_| on_dismiss.run(toast.id)
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}

#[component]
pub(super) fn Sidebar(
    documents: Signal<Vec<Document>>,
    selected_id: Signal<Option<DocumentId>>,
    categories: Signal<CategoryFlags>,
    accept: String,
    user_name: String,
    on_select: Callback<DocumentId>,
    on_category: Callback<(CategoryCheckbox, bool)>,
    on_upload: Callback<Vec<IncomingFile>>,
    on_export: Callback<()>,
    on_open_form: Callback<()>,
    on_open_subscription: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    // Dropdown visibility is purely presentational.
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <aside class="sidebar">
            <div class="sidebar-section">
                <div class="user-menu">
                    <button
                        class="btn ghost user-menu-trigger"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="subtle">"▾"</span>
                        <span>{user_name}</span>
                        <span>"👤"</span>
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="user-menu-content">
                            {UserMenuItem::all()
                                .iter()
                                .map(|&item| {
                                    let class = match item {
                                        UserMenuItem::Logout => "menu-item destructive",
                                        UserMenuItem::Subscription => "menu-item",
                                    };
                                    view! {
                                        <button
                                            class=class
                                            on:click=move |_| {
                                                set_menu_open.set(false);
                                                match item {
                                                    UserMenuItem::Subscription => on_open_subscription.run(()),
                                                    UserMenuItem::Logout => on_logout.run(()),
                                                }
                                            }
                                        >
                                            <span class="menu-ico">{item.icon()}</span>
                                            {item.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>

                <h2 class="sidebar-title">"Управление"</h2>

                <button class="btn secondary wide" on:click=move |_| on_open_form.run(())>
                    "📝 Заполнить форму"
                </button>

                <label class="btn primary wide" for="file-upload">
                    <input
                        id="file-upload"
                        type="file"
                        multiple
                        accept=accept
                        class="hidden"
                        on:change=move |ev| on_upload.run(files::incoming_files(&ev))
                    />
                    "⬆ Загрузить документы"
                </label>
            </div>

            <div class="sidebar-section">
                <h3 class="section-title">"Документы на выгрузку"</h3>
                {CategoryCheckbox::all()
                    .iter()
                    .map(|&checkbox| {
                        view! {
                            <div class="checkbox-row">
                                <input
                                    type="checkbox"
                                    id=checkbox.id()
                                    prop:checked=move || checkbox.is_checked(categories.get())
                                    on:change=move |ev| {
                                        on_category.run((checkbox, event_target_checked(&ev)))
                                    }
                                />
                                <label for=checkbox.id()>{checkbox.label()}</label>
                            </div>
                        }
                    })
                    .collect_view()}
                <button class="btn primary wide" on:click=move |_| on_export.run(())>
                    "⬇ Выгрузить"
                </button>
            </div>

            <div class="sidebar-section doc-list">
                <h3 class="section-title">"Загруженные файлы"</h3>
                <Show
                    when=move || documents.with(|d| !d.is_empty())
                    fallback=|| view! { <p class="empty">"Нет загруженных документов"</p> }
                >
                    <For
                        each=move || documents.get()
                        key=|d| d.id.clone()
                        children=move |doc| {
                            let id = doc.id.clone();
                            let is_selected = Memo::new({
                                let id = id.clone();
                                move |_| selected_id.with(|s| s.as_ref() == Some(&id))
                            });
                            let date = format_upload_date(&doc.uploaded_at.with_timezone(&Local));
                            view! {
                                <div
                                    class=move || document_item_class(is_selected.get())
                                    role="button"
                                    tabindex="0"
                                    on:click=move |_| on_select.run(id.clone())
                                >
                                    <span class="doc-ico">"📄"</span>
                                    <div class="doc-meta">
                                        <p class="doc-name">{doc.name}</p>
                                        <p class="doc-date">{date}</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </aside>
    }
}
