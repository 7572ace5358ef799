use std::sync::{Arc, Mutex};

use docflow::prelude::*;

fn app() -> DocflowApp {
    DocflowApp::new(DocflowConfig::default())
}

fn upload(app: &mut DocflowApp, names: &[&str]) -> usize {
    app.ingest_files_now(names.iter().map(|n| IncomingFile::new(*n, "")))
}

fn names(app: &DocflowApp) -> Vec<String> {
    app.library()
        .documents()
        .iter()
        .map(|d| d.name.clone())
        .collect()
}

#[derive(Clone, Default)]
struct RecordingExporter {
    seen: Arc<Mutex<Vec<(String, CategoryFlags)>>>,
}

impl DocumentExporter for RecordingExporter {
    fn export(&mut self, request: &ExportRequest<'_>) -> Result<(), DocflowError> {
        self.seen
            .lock()
            .unwrap()
            .push((request.document.name.clone(), request.categories));
        Ok(())
    }
}

#[test]
fn upload_two_files_selects_the_first() {
    let mut app = app();
    assert_eq!(upload(&mut app, &["a.pdf", "b.txt"]), 2);

    assert_eq!(names(&app), ["a.pdf", "b.txt"]);
    let selected = app.library().selected().unwrap();
    assert_eq!(selected.name, "a.pdf");

    let toast = app.last_toast().unwrap();
    assert_eq!(toast.level, ToastLevel::Success);
    assert_eq!(toast.message, "Загружено файлов: 2");
}

#[test]
fn second_upload_moves_selection_to_its_first_file() {
    let mut app = app();
    upload(&mut app, &["a.pdf", "b.txt"]);
    upload(&mut app, &["c.doc"]);

    assert_eq!(names(&app), ["a.pdf", "b.txt", "c.doc"]);
    assert_eq!(app.library().selected().unwrap().name, "c.doc");
}

#[test]
fn empty_upload_raises_no_toast() {
    let mut app = app();
    assert_eq!(upload(&mut app, &[]), 0);
    assert!(app.toasts().is_empty());
    assert!(app.library().selected().is_none());
}

#[test]
fn export_without_selection_is_an_error() {
    let mut app = app();

    let err = app.export().unwrap_err();
    assert!(matches!(err, DocflowError::NoSelection));
    assert!(app.library().is_empty());

    let toasts = app.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(toasts[0].message, "Выберите документ для выгрузки");
}

#[test]
fn export_names_the_selection_and_leaves_the_list_alone() {
    let exporter = RecordingExporter::default();
    let mut app = DocflowApp::with_services(
        DocflowConfig::default(),
        Box::new(AcceptAll),
        Box::new(exporter.clone()),
    );
    upload(&mut app, &["a.pdf", "b.txt"]);
    let b = app.library().documents()[1].id.clone();
    assert!(app.select(&b));
    app.set_warehouse_receipt(true);
    app.set_ttn(true);

    let before = app.library().documents().to_vec();
    app.export().unwrap();

    assert_eq!(app.library().documents(), before.as_slice());
    let toast = app.last_toast().unwrap();
    assert_eq!(toast.level, ToastLevel::Success);
    assert_eq!(toast.message, "Документ \"b.txt\" выгружен");

    let seen = exporter.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "b.txt");
    assert!(seen[0].1.warehouse_receipt);
    assert_eq!(seen[0].1.waybill, WaybillKind::Ttn);
}

#[test]
fn smr_then_ttn() {
    let mut app = app();
    app.set_smr(true);
    app.set_ttn(true);
    assert!(!app.categories().smr());
    assert!(app.categories().ttn());
}

#[test]
fn login_persists_and_logout_clears() {
    let mut app = app();
    let mut store = MemoryStore::new();
    app.set_login_email("driver@example.com");
    app.set_login_password("hunter2");

    app.login(&mut store).unwrap();
    assert!(app.is_logged_in());
    assert_eq!(
        store.get(LOGGED_IN_KEY).unwrap().as_deref(),
        Some(LOGGED_IN_VALUE)
    );

    app.logout(&mut store);
    assert!(!app.is_logged_in());
    assert_eq!(store.get(LOGGED_IN_KEY).unwrap(), None);
}

#[test]
fn restore_honours_only_the_literal_flag() {
    let mut app = app();
    assert!(app.restore(&MemoryStore::with_entry(LOGGED_IN_KEY, "true")).unwrap());

    let mut app = DocflowApp::new(DocflowConfig::default());
    assert!(!app.restore(&MemoryStore::with_entry(LOGGED_IN_KEY, "yes")).unwrap());
    assert!(!app.restore(&MemoryStore::new()).unwrap());
}

#[test]
fn reload_keeps_login_but_drops_documents() {
    let mut store = MemoryStore::new();
    let mut first = app();
    first.login(&mut store).unwrap();
    upload(&mut first, &["a.pdf"]);

    let mut second = app();
    assert!(second.restore(&store).unwrap());
    assert!(second.library().is_empty());
}

#[test]
fn subscribe_closes_dialog_without_touching_the_counter() {
    let mut app = app();
    let remaining = app.remaining_documents();
    app.open_subscription();

    app.subscribe(SubscriptionPlan::Standard);

    assert!(!app.is_subscription_open());
    assert_eq!(app.remaining_documents(), remaining);
    assert!(app.last_toast().unwrap().message.contains("Стандартный"));
}

#[test]
fn share_actions_close_the_submenu() {
    let mut app = app();
    app.open_form();

    app.toggle_share_menu();
    let effect = app.copy_link();
    assert!(!app.is_share_menu_open());
    assert_eq!(
        effect,
        Effect::WriteClipboard(app.config().share_link.clone())
    );

    for &target in ShareTarget::all() {
        app.toggle_share_menu();
        app.share_to(target);
        assert!(!app.is_share_menu_open());
        assert!(app.last_toast().unwrap().message.contains(target.label()));
    }
    assert!(app.is_form_open());
}

#[test]
fn dismissed_toasts_disappear() {
    let mut app = app();
    upload(&mut app, &["a.pdf"]);
    let id = app.last_toast().unwrap().id;
    app.dismiss_toast(id);
    assert!(app.toasts().is_empty());
}
