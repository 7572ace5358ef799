//! Root controller: the single owner of all DocFlow session state.
//!
//! Views read through the accessors and report user input through the
//! `&mut self` operations. Browser side effects are never performed here;
//! operations that need one return an [`Effect`] for the host to carry out.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::categories::CategoryFlags;
use crate::config::DocflowConfig;
use crate::document::{DocumentId, IncomingFile};
use crate::error::{DocflowError, Result};
use crate::export::{DocumentExporter, ExportRequest, NoopExporter};
use crate::library::DocumentLibrary;
use crate::notify::{Toast, ToastQueue};
use crate::plans::SubscriptionPlan;
use crate::session::{
    is_logged_in_value, AcceptAll, CredentialVerifier, Credentials, SessionStore, LOGGED_IN_VALUE,
};
use crate::transport_order::{OrderField, ShareTarget, TransportOrder};

/// Browser side effect requested by an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire-and-forget clipboard write.
    WriteClipboard(String),
    /// Trigger a download of a static asset.
    Download { url: String, filename: String },
}

pub struct DocflowApp {
    config: DocflowConfig,
    verifier: Box<dyn CredentialVerifier + Send + Sync>,
    exporter: Box<dyn DocumentExporter + Send + Sync>,

    logged_in: bool,
    credentials: Credentials,

    library: DocumentLibrary,
    categories: CategoryFlags,
    transport_order: TransportOrder,

    form_open: bool,
    subscription_open: bool,
    share_menu_open: bool,

    toasts: ToastQueue,
}

impl DocflowApp {
    /// Controller wired to the mock verifier and exporter.
    pub fn new(config: DocflowConfig) -> Self {
        Self::with_services(config, Box::new(AcceptAll), Box::new(NoopExporter))
    }

    pub fn with_services(
        config: DocflowConfig,
        verifier: Box<dyn CredentialVerifier + Send + Sync>,
        exporter: Box<dyn DocumentExporter + Send + Sync>,
    ) -> Self {
        Self {
            config,
            verifier,
            exporter,
            logged_in: false,
            credentials: Credentials::default(),
            library: DocumentLibrary::new(),
            categories: CategoryFlags::default(),
            transport_order: TransportOrder::default(),
            form_open: false,
            subscription_open: false,
            share_menu_open: false,
            toasts: ToastQueue::new(),
        }
    }

    pub fn config(&self) -> &DocflowConfig {
        &self.config
    }

    // ---- session -------------------------------------------------------

    /// Picks up the durable login flag. Only the literal `"true"` logs in.
    pub fn restore(&mut self, store: &dyn SessionStore) -> Result<bool> {
        let raw = store.get(&self.config.session_key)?;
        self.logged_in = is_logged_in_value(raw.as_deref());
        debug!(logged_in = self.logged_in, "session restored");
        Ok(self.logged_in)
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn set_login_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    pub fn set_login_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    /// Logs in and writes the durable flag.
    ///
    /// A store failure does not undo the login; the session is then simply
    /// not remembered across reloads.
    pub fn login(&mut self, store: &mut dyn SessionStore) -> Result<()> {
        if !self.verifier.verify(&self.credentials) {
            self.toasts.error("Неверный логин или пароль");
            return Err(DocflowError::Rejected);
        }

        self.logged_in = true;
        if let Err(e) = store.set(&self.config.session_key, LOGGED_IN_VALUE) {
            warn!(error = %e, "login flag not persisted");
        }
        info!("logged in");
        self.toasts.success("Добро пожаловать в DocFlow!");
        Ok(())
    }

    pub fn logout(&mut self, store: &mut dyn SessionStore) {
        self.logged_in = false;
        self.form_open = false;
        self.subscription_open = false;
        self.share_menu_open = false;
        if let Err(e) = store.remove(&self.config.session_key) {
            warn!(error = %e, "login flag not removed");
        }
        info!("logged out");
        self.toasts.info("Вы вышли из системы");
    }

    pub fn request_password_reset(&mut self) {
        self.toasts.info("Функция восстановления пароля");
    }

    pub fn request_account(&mut self) {
        self.toasts.info("Функция создания аккаунта");
    }

    // ---- documents -----------------------------------------------------

    pub fn library(&self) -> &DocumentLibrary {
        &self.library
    }

    pub fn ingest_files<I>(&mut self, files: I, uploaded_at: DateTime<Utc>) -> usize
    where
        I: IntoIterator<Item = IncomingFile>,
    {
        let added = self.library.ingest(files, uploaded_at);
        if added > 0 {
            info!(added, total = self.library.len(), "documents ingested");
            self.toasts.success(format!("Загружено файлов: {added}"));
        }
        added
    }

    /// [`Self::ingest_files`] stamped with the current time.
    pub fn ingest_files_now<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = IncomingFile>,
    {
        self.ingest_files(files, Utc::now())
    }

    pub fn select(&mut self, id: &DocumentId) -> bool {
        self.library.select(id)
    }

    /// Hands the selected document to the exporter.
    pub fn export(&mut self) -> Result<()> {
        let Some(document) = self.library.selected() else {
            self.toasts.error("Выберите документ для выгрузки");
            return Err(DocflowError::NoSelection);
        };

        let request = ExportRequest {
            document,
            categories: self.categories,
        };
        if let Err(e) = self.exporter.export(&request) {
            warn!(id = %document.id, error = %e, "export failed");
            let message = format!("Не удалось выгрузить документ \"{}\"", document.name);
            self.toasts.error(message);
            return Err(e);
        }

        info!(id = %document.id, name = %document.name, "document exported");
        let message = format!("Документ \"{}\" выгружен", document.name);
        self.toasts.success(message);
        Ok(())
    }

    // ---- categories ----------------------------------------------------

    pub fn categories(&self) -> CategoryFlags {
        self.categories
    }

    pub fn set_warehouse_receipt(&mut self, checked: bool) {
        self.categories.set_warehouse_receipt(checked);
        debug!(categories = ?self.categories, "categories changed");
    }

    pub fn set_smr(&mut self, checked: bool) {
        self.categories.set_smr(checked);
        debug!(categories = ?self.categories, "categories changed");
    }

    pub fn set_ttn(&mut self, checked: bool) {
        self.categories.set_ttn(checked);
        debug!(categories = ?self.categories, "categories changed");
    }

    // ---- transport order dialog ----------------------------------------

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.share_menu_open = false;
    }

    pub fn transport_order(&self) -> &TransportOrder {
        &self.transport_order
    }

    pub fn set_order_field(&mut self, field: OrderField, value: impl Into<String>) {
        self.transport_order.set(field, value);
    }

    pub fn is_share_menu_open(&self) -> bool {
        self.share_menu_open
    }

    pub fn toggle_share_menu(&mut self) {
        self.share_menu_open = !self.share_menu_open;
    }

    pub fn download_form(&mut self) -> Effect {
        self.toasts.success("Форма загружается");
        Effect::Download {
            url: self.config.form_template_url.clone(),
            filename: self.config.form_template_filename.clone(),
        }
    }

    pub fn copy_link(&mut self) -> Effect {
        self.share_menu_open = false;
        self.toasts.success("Ссылка скопирована");
        Effect::WriteClipboard(self.config.share_link.clone())
    }

    pub fn share_to(&mut self, target: ShareTarget) {
        self.share_menu_open = false;
        info!(target = target.label(), "form shared");
        self.toasts.success(format!("Отправка в {}", target.label()));
    }

    // ---- subscription dialog -------------------------------------------

    pub fn is_subscription_open(&self) -> bool {
        self.subscription_open
    }

    pub fn open_subscription(&mut self) {
        self.subscription_open = true;
    }

    pub fn close_subscription(&mut self) {
        self.subscription_open = false;
    }

    pub fn remaining_documents(&self) -> u32 {
        self.config.remaining_documents
    }

    pub fn subscribe(&mut self, plan: SubscriptionPlan) {
        self.subscription_open = false;
        info!(plan = plan.name(), "plan chosen");
        self.toasts.success(format!("Выбран тариф «{}»", plan.name()));
    }

    // ---- toasts --------------------------------------------------------

    pub fn toasts(&self) -> &[Toast] {
        self.toasts.toasts()
    }

    pub fn last_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.dismiss(id);
    }

    /// See [`ToastQueue::watermark`].
    pub fn toast_watermark(&self) -> u64 {
        self.toasts.watermark()
    }

    pub fn toasts_since(&self, watermark: u64) -> Vec<u64> {
        self.toasts.ids_since(watermark)
    }
}
