use docflow::plans::SubscriptionPlan;
use docflow::transport_order::{InputKind, OrderField, ShareTarget, TransportOrder};
use leptos::prelude::*;

#[component]
fn Modal(
    open: Signal<bool>,
    on_close: Callback<()>,
    title: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())></div>
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="icon-btn" title="Закрыть" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </Show>
    }
}

#[component]
fn OrderInput(
    field: OrderField,
    order: Signal<TransportOrder>,
    on_field: Callback<(OrderField, String)>,
) -> impl IntoView {
    let value = move || order.with(|o| o.get(field).to_string());
    let input = match field.kind() {
        InputKind::MultiLine => view! {
            <textarea
                id=field.id()
                class="textarea"
                placeholder=field.placeholder()
                prop:value=value
                on:input=move |ev| on_field.run((field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                id=field.id()
                type=kind.html_type()
                placeholder=field.placeholder()
                prop:value=value
                on:input=move |ev| on_field.run((field, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label for=field.id()>{field.label()}</label>
            {input}
        </div>
    }
}

#[component]
pub(super) fn TransportOrderDialog(
    open: Signal<bool>,
    share_menu_open: Signal<bool>,
    order: Signal<TransportOrder>,
    on_field: Callback<(OrderField, String)>,
    on_close: Callback<()>,
    on_toggle_share: Callback<()>,
    on_download: Callback<()>,
    on_copy_link: Callback<()>,
    on_share: Callback<ShareTarget>,
) -> impl IntoView {
    view! {
        <Modal open=open on_close=on_close title="Транспортная накладная">
            <div class="order-form">
                {OrderField::rows()
                    .iter()
                    .map(|row| {
                        let class = format!("form-row cols-{}", row.len());
                        view! {
                            <div class=class>
                                {row
                                    .iter()
                                    .map(|&field| view! { <OrderInput field=field order=order on_field=on_field /> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="modal-actions">
                <button class="btn outline" on:click=move |_| on_close.run(())>
                    "✕ Закрыть"
                </button>
                <button class="btn outline accent" on:click=move |_| on_download.run(())>
                    "⬇ Скачать форму"
                </button>
                <div class="share">
                    <Show when=move || share_menu_open.get()>
                        <div class="share-menu">
                            <button class="menu-item" on:click=move |_| on_copy_link.run(())>
                                "🔗 Скопировать ссылку"
                            </button>
                            {ShareTarget::all()
                                .iter()
                                .map(|&target| {
                                    view! {
                                        <button class="menu-item" on:click=move |_| on_share.run(target)>
                                            {target.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                    <button class="btn primary wide" on:click=move |_| on_toggle_share.run(())>
                        "📤 Отправить форму"
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[component]
pub(super) fn SubscriptionDialog(
    open: Signal<bool>,
    remaining: Signal<u32>,
    on_close: Callback<()>,
    on_subscribe: Callback<SubscriptionPlan>,
) -> impl IntoView {
    view! {
        <Modal open=open on_close=on_close title="Подписка">
            <div class="remaining">
                <p class="subtle">"Осталось документов"</p>
                <p class="remaining-count">{move || remaining.get().to_string()}</p>
            </div>

            <div class="plans">
                {SubscriptionPlan::all()
                    .iter()
                    .map(|&plan| {
                        let class = if plan.is_featured() { "card plan featured" } else { "card plan" };
                        view! {
                            <div class=class role="button" tabindex="0" on:click=move |_| on_subscribe.run(plan)>
                                <div class="plan-head">
                                    <div>
                                        <h3>{plan.name()}</h3>
                                        <p class="subtle">{plan.tagline()}</p>
                                    </div>
                                    <div class="plan-price">
                                        <p class="price">{plan.price_label()}</p>
                                        <p class="subtle">"в месяц"</p>
                                    </div>
                                </div>
                                <div class="plan-quota">"📄 "{plan.quota_label()}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Modal>
    }
}
