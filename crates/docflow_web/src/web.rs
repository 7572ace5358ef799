use std::time::Duration;

use docflow::app::{DocflowApp, Effect as SideEffect};
use docflow::config::DocflowConfig;
use docflow::document::{DocumentId, IncomingFile};
use docflow::plans::SubscriptionPlan;
use docflow::transport_order::{OrderField, ShareTarget};
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::ui_model::CategoryCheckbox;

mod dialogs;
mod files;
mod logging;
mod login;
mod preview;
mod shell;
mod storage;

use dialogs::{SubscriptionDialog, TransportOrderDialog};
use login::LoginPage;
use preview::DocumentPreview;
use shell::{Sidebar, ToastStack};
use storage::BrowserSessionStore;

const BUNDLED_CONFIG: &str = include_str!("../../../config/docflow.json");

pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(|| view! { <App /> });
}

fn load_config() -> DocflowConfig {
    match DocflowConfig::from_json_str(BUNDLED_CONFIG) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "bundled config rejected, using defaults");
            DocflowConfig::default()
        }
    }
}

/// Runs `op` against the controller and schedules auto-dismissal for any
/// toast it raised.
fn dispatch<R>(app: RwSignal<DocflowApp>, op: impl FnOnce(&mut DocflowApp) -> R) -> Option<R> {
    let mark = app.with_untracked(|a| a.toast_watermark());
    let out = app.try_update(op);

    let (fresh, timeout_ms) =
        app.with_untracked(|a| (a.toasts_since(mark), a.config().toast_timeout_ms));
    for id in fresh {
        set_timeout(
            move || app.update(|a| a.dismiss_toast(id)),
            Duration::from_millis(u64::from(timeout_ms)),
        );
    }
    out
}

#[component]
fn App() -> impl IntoView {
    let app = RwSignal::new(DocflowApp::new(load_config()));

    dispatch(app, |a| {
        if let Err(e) = a.restore(&BrowserSessionStore) {
            warn!(error = %e, "could not read login flag");
        }
    });

    let (accept, user_name, background_url, logo_url) = app.with_untracked(|a| {
        let cfg = a.config();
        (
            cfg.accept_attr(),
            cfg.user_display_name.clone(),
            cfg.login_background_url.clone(),
            cfg.logo_url.clone(),
        )
    });

    // ---- derived state ----
    let logged_in = Signal::derive(move || app.with(|a| a.is_logged_in()));
    let login_email = Signal::derive(move || app.with(|a| a.credentials().email.clone()));
    let login_password = Signal::derive(move || app.with(|a| a.credentials().password.clone()));
    let documents = Signal::derive(move || app.with(|a| a.library().documents().to_vec()));
    let selected = Signal::derive(move || app.with(|a| a.library().selected().cloned()));
    let selected_id = Signal::derive(move || selected.with(|d| d.as_ref().map(|d| d.id.clone())));
    let categories = Signal::derive(move || app.with(|a| a.categories()));
    let form_open = Signal::derive(move || app.with(|a| a.is_form_open()));
    let share_menu_open = Signal::derive(move || app.with(|a| a.is_share_menu_open()));
    let order = Signal::derive(move || app.with(|a| a.transport_order().clone()));
    let subscription_open = Signal::derive(move || app.with(|a| a.is_subscription_open()));
    let remaining = Signal::derive(move || app.with(|a| a.remaining_documents()));
    let toasts = Signal::derive(move || app.with(|a| a.toasts().to_vec()));

    // ---- callbacks ----
    let on_email = Callback::new(move |v: String| {
        app.update(|a| a.set_login_email(v));
    });
    let on_password = Callback::new(move |v: String| {
        app.update(|a| a.set_login_password(v));
    });
    let on_login = Callback::new(move |()| {
        dispatch(app, |a| {
            if let Err(e) = a.login(&mut BrowserSessionStore) {
                debug!(error = %e, "login refused");
            }
        });
    });
    let on_recover = Callback::new(move |()| {
        dispatch(app, |a| a.request_password_reset());
    });
    let on_register = Callback::new(move |()| {
        dispatch(app, |a| a.request_account());
    });
    let on_logout = Callback::new(move |()| {
        dispatch(app, |a| a.logout(&mut BrowserSessionStore));
    });

    let on_upload = Callback::new(move |files: Vec<IncomingFile>| {
        dispatch(app, |a| a.ingest_files_now(files));
    });
    let on_select = Callback::new(move |id: DocumentId| {
        app.update(|a| {
            a.select(&id);
        });
    });
    let on_category = Callback::new(move |(checkbox, checked): (CategoryCheckbox, bool)| {
        app.update(|a| checkbox.apply(a, checked));
    });
    let on_export = Callback::new(move |()| {
        dispatch(app, |a| {
            if let Err(e) = a.export() {
                debug!(error = %e, "export not completed");
            }
        });
    });

    let on_open_form = Callback::new(move |()| app.update(|a| a.open_form()));
    let on_close_form = Callback::new(move |()| app.update(|a| a.close_form()));
    let on_order_field = Callback::new(move |(field, value): (OrderField, String)| {
        app.update(|a| a.set_order_field(field, value));
    });
    let on_toggle_share = Callback::new(move |()| app.update(|a| a.toggle_share_menu()));
    let on_download = Callback::new(move |()| {
        if let Some(effect) = dispatch(app, |a| a.download_form()) {
            perform(effect);
        }
    });
    let on_copy_link = Callback::new(move |()| {
        if let Some(effect) = dispatch(app, |a| a.copy_link()) {
            perform(effect);
        }
    });
    let on_share = Callback::new(move |target: ShareTarget| {
        dispatch(app, |a| a.share_to(target));
    });

    let on_open_subscription = Callback::new(move |()| app.update(|a| a.open_subscription()));
    let on_close_subscription = Callback::new(move |()| app.update(|a| a.close_subscription()));
    let on_subscribe = Callback::new(move |plan: SubscriptionPlan| {
        dispatch(app, |a| a.subscribe(plan));
    });

    let on_dismiss = Callback::new(move |id: u64| app.update(|a| a.dismiss_toast(id)));

    view! {
        <Show
            when=move || logged_in.get()
            fallback=move || {
                view! {
                    <LoginPage
                        email=login_email
                        password=login_password
                        background_url=background_url.clone()
                        logo_url=logo_url.clone()
                        on_email=on_email
                        on_password=on_password
                        on_login=on_login
                        on_recover=on_recover
                        on_register=on_register
                    />
                }
            }
        >
            <div class="workspace">
                <div class="workspace-main">
                    <div class="workspace-heading">
                        <h1>{crate::ui_model::APP_TITLE}</h1>
                        <p class="subtle">{crate::ui_model::APP_SUBTITLE}</p>
                    </div>
                    <DocumentPreview selected=selected />
                </div>
                <Sidebar
                    documents=documents
                    selected_id=selected_id
                    categories=categories
                    accept=accept.clone()
                    user_name=user_name.clone()
                    on_select=on_select
                    on_category=on_category
                    on_upload=on_upload
                    on_export=on_export
                    on_open_form=on_open_form
                    on_open_subscription=on_open_subscription
                    on_logout=on_logout
                />
            </div>
            <TransportOrderDialog
                open=form_open
                share_menu_open=share_menu_open
                order=order
                on_field=on_order_field
                on_close=on_close_form
                on_toggle_share=on_toggle_share
                on_download=on_download
                on_copy_link=on_copy_link
                on_share=on_share
            />
            <SubscriptionDialog
                open=subscription_open
                remaining=remaining
                on_close=on_close_subscription
                on_subscribe=on_subscribe
            />
        </Show>
        <ToastStack toasts=toasts on_dismiss=on_dismiss />
    }
}

fn perform(effect: SideEffect) {
    match effect {
        SideEffect::WriteClipboard(text) => files::write_clipboard(&text),
        SideEffect::Download { url, filename } => {
            if let Err(e) = files::download_url(&url, &filename) {
                warn!(error = %e, url = %url, "download failed");
            }
        }
    }
}
