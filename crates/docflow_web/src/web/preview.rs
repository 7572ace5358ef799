use chrono::Local;
use docflow::document::Document;
use leptos::prelude::*;

use crate::ui_model::format_upload_timestamp;

#[component]
pub(super) fn DocumentPreview(selected: Signal<Option<Document>>) -> impl IntoView {
    view! {
        <div class="card preview">
            {move || match selected.get() {
                None => view! {
                    <div class="preview-empty">
                        <div class="preview-badge muted">"❔"</div>
                        <h3>"Загрузите документ для начала работы"</h3>
                    </div>
                }
                .into_any(),
                Some(doc) => {
                    let uploaded = format_upload_timestamp(&doc.uploaded_at.with_timezone(&Local));
                    let type_label = doc.type_label().to_string();
                    view! {
                        <div class="preview-body">
                            <div class="preview-badge">"📄"</div>
                            <h2>{doc.name}</h2>
                            <p class="subtle">"Загружен: "{uploaded}</p>

                            <div class="preview-placeholder">
                                <div class="preview-eye">"👁"</div>
                                <p class="subtle">"Предпросмотр документа появится здесь"</p>
                            </div>

                            <div class="preview-facts">
                                <div class="fact">
                                    <div class="fact-title">"Статус"</div>
                                    <div class="subtle">"Готов к заполнению"</div>
                                </div>
                                <div class="fact">
                                    <div class="fact-title">"Тип"</div>
                                    <div class="subtle">{type_label}</div>
                                </div>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
