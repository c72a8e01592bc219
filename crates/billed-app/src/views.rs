//! Pure view templates: view-model in, displayed text out.
//!
//! Nothing here touches a store or the view root; containers feed these
//! functions and mount the result.

use crate::containers::{DisplayBill, NewBillForm};
use crate::view_root::{ModalState, NavIcon};

fn marker(active: Option<NavIcon>, icon: NavIcon) -> &'static str {
    if active == Some(icon) {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Vertical navigation bar. The `[x]` marker is the active-icon highlight;
/// at most one entry carries it.
pub fn render_nav(active: Option<NavIcon>) -> String {
    format!(
        "{} Notes de frais   {} Nouvelle note\n\n",
        marker(active, NavIcon::Window),
        marker(active, NavIcon::Mail),
    )
}

/// The employee bill list.
pub fn bills_ui(rows: &[DisplayBill]) -> String {
    let mut out = String::from("Mes notes de frais\n\n");
    out.push_str("Type | Nom | Date | Montant | Statut | Justificatif\n");
    for row in rows {
        let eye = match row.bill.file_url.as_deref() {
            Some(url) => format!("[voir] {}", url),
            None => String::from("(aucun)"),
        };
        out.push_str(&format!(
            "{} | {} | {} | {} € | {} | {}\n",
            row.bill.expense_type.as_str(),
            row.bill.name,
            row.date_display,
            row.bill.amount,
            row.status_display,
            eye,
        ));
    }
    out
}

/// The creation form, showing the current field values.
pub fn new_bill_ui(form: &NewBillForm) -> String {
    format!(
        "Envoyer une note de frais\n\n\
         Type de dépense : {}\n\
         Nom de la dépense : {}\n\
         Date : {}\n\
         Montant TTC : {}\n\
         TVA : {} ({} %)\n\
         Commentaire : {}\n\
         Justificatif : {}\n",
        form.expense_type, form.name, form.date, form.amount, form.vat, form.pct,
        form.commentary, form.file_display,
    )
}

/// Shown while a fetch is unresolved.
pub fn loading_ui() -> String {
    String::from("Loading...\n")
}

/// Shown when a fetch rejected; the message appears verbatim.
pub fn error_ui(message: &str) -> String {
    format!("Erreur\n{}\n", message)
}

/// Admin landing view. Dashboard functionality is out of scope; the route
/// only exists as the default target for non-employee sessions.
pub fn dashboard_ui() -> String {
    String::from("Validations\n")
}

/// Attachment preview region, once opened.
pub fn render_modal(modal: &ModalState) -> String {
    match modal.file_url.as_deref() {
        Some(url) => format!("\nJustificatif ({}%)\n{}\n", modal.width_pct, url),
        None => String::from("\nJustificatif\n(aucun fichier)\n"),
    }
}
