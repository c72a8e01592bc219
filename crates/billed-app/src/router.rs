use crate::containers::{BillsContainer, NewBillContainer};
use crate::error::{Error, Result};
use crate::view_root::{NavIcon, ViewHandle};
use crate::views;
use billed_store::RemoteStore;
use billed_types::{Session, UserType};
use std::sync::Arc;

/// The fixed set of path tokens the dispatcher knows, built once and
/// immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    Bills,
    NewBill,
    Dashboard,
}

impl RoutePath {
    pub fn token(&self) -> &'static str {
        match self {
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
            RoutePath::Dashboard => "#admin/dashboard",
        }
    }

    /// Exact-token lookup; anything else is not a route.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "#employee/bills" => Some(RoutePath::Bills),
            "#employee/bill/new" => Some(RoutePath::NewBill),
            "#admin/dashboard" => Some(RoutePath::Dashboard),
            _ => None,
        }
    }

    /// Navigation icon highlighted for this view. The admin dashboard has
    /// no entry in the employee vertical layout.
    pub fn icon(&self) -> Option<NavIcon> {
        match self {
            RoutePath::Bills => Some(NavIcon::Window),
            RoutePath::NewBill => Some(NavIcon::Mail),
            RoutePath::Dashboard => None,
        }
    }
}

/// Initial-load default resolution: a pure function of the current token
/// and the session role. An empty token lands an employee on the bill
/// list and everyone else on the dashboard; a non-empty token stands.
pub fn default_route<'a>(token: &'a str, user_type: UserType) -> &'a str {
    if !token.is_empty() {
        return token;
    }
    match user_type {
        UserType::Employee => RoutePath::Bills.token(),
        UserType::Admin => RoutePath::Dashboard.token(),
    }
}

struct DispatcherInner {
    view: ViewHandle,
    store: Option<Arc<dyn RemoteStore>>,
    session: Session,
}

/// The view dispatcher: owns the token→view mapping and the only entry
/// point that swaps the mounted view.
///
/// Containers do not hold the dispatcher itself; they are handed a
/// [`Navigator`] capability at construction, which is all they need to
/// trigger a transition.
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

impl Dispatcher {
    pub fn new(view: ViewHandle, store: Option<Arc<dyn RemoteStore>>, session: Session) -> Self {
        Dispatcher {
            inner: Arc::new(DispatcherInner {
                view,
                store,
                session,
            }),
        }
    }

    /// Capability handle for containers.
    pub fn navigator(&self) -> Navigator {
        Navigator {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn view(&self) -> &ViewHandle {
        &self.inner.view
    }

    /// Swap the mounted view to the one registered for `token`.
    ///
    /// An unknown token fails with [`Error::RouteNotFound`] and leaves the
    /// prior view intact: no content write, no icon change, no epoch bump
    /// (pending fetches for the mounted view stay valid). The caller logs
    /// it; nothing here is fatal.
    pub async fn navigate(&self, token: &str) -> Result<()> {
        navigate_inner(&self.inner, token).await
    }
}

/// Cloneable navigation capability, the one thing every container receives
/// instead of a globally reachable entry point.
#[derive(Clone)]
pub struct Navigator {
    inner: Arc<DispatcherInner>,
}

impl Navigator {
    pub async fn navigate(&self, token: &str) -> Result<()> {
        navigate_inner(&self.inner, token).await
    }
}

async fn navigate_inner(inner: &Arc<DispatcherInner>, token: &str) -> Result<()> {
    let route = RoutePath::parse(token).ok_or_else(|| Error::RouteNotFound(token.to_string()))?;

    let epoch = inner.view.begin_mount(route.icon());
    let navigator = Navigator {
        inner: Arc::clone(inner),
    };

    match route {
        RoutePath::Bills => {
            inner.view.set_content(epoch, views::loading_ui());

            let container = BillsContainer::new(
                inner.view.clone(),
                navigator,
                inner.store.clone(),
                inner.session.clone(),
            );
            let content = match container.get_bills().await {
                Ok(rows) => views::bills_ui(&rows),
                Err(err) => views::error_ui(&err.to_string()),
            };
            inner.view.set_content(epoch, content);
        }
        RoutePath::NewBill => {
            let container = NewBillContainer::new(
                inner.view.clone(),
                navigator,
                inner.store.clone(),
                inner.session.clone(),
            );
            inner.view.set_content(epoch, views::new_bill_ui(&container.form));
        }
        RoutePath::Dashboard => {
            inner.view.set_content(epoch, views::dashboard_ui());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use billed_store::{FailingStore, MemoryStore};
    use billed_types::{BillStatus, DraftBill, ExpenseType};

    fn dispatcher_with(store: Option<Arc<dyn RemoteStore>>) -> Dispatcher {
        Dispatcher::new(ViewHandle::new(), store, Session::employee("a@a"))
    }

    #[test]
    fn default_route_is_role_aware() {
        assert_eq!(default_route("", UserType::Employee), "#employee/bills");
        assert_eq!(default_route("", UserType::Admin), "#admin/dashboard");
        assert_eq!(
            default_route("#employee/bill/new", UserType::Employee),
            "#employee/bill/new"
        );
    }

    #[tokio::test]
    async fn bills_navigation_highlights_the_window_icon() {
        let dispatcher = dispatcher_with(None);
        dispatcher.navigate("#employee/bills").await.unwrap();

        assert_eq!(dispatcher.view().active_icon(), Some(NavIcon::Window));
        assert!(dispatcher.view().content().contains("Mes notes de frais"));
        // Rendered nav carries exactly one active marker.
        assert_eq!(dispatcher.view().rendered().matches("[x]").count(), 1);
    }

    #[tokio::test]
    async fn new_bill_navigation_highlights_the_mail_icon() {
        let dispatcher = dispatcher_with(None);
        dispatcher.navigate("#employee/bill/new").await.unwrap();

        assert_eq!(dispatcher.view().active_icon(), Some(NavIcon::Mail));
        assert!(dispatcher
            .view()
            .content()
            .contains("Envoyer une note de frais"));
        assert_eq!(dispatcher.view().rendered().matches("[x]").count(), 1);
    }

    #[tokio::test]
    async fn unknown_token_leaves_the_mounted_view_intact() {
        let dispatcher = dispatcher_with(None);
        dispatcher.navigate("#employee/bills").await.unwrap();
        let before = dispatcher.view().rendered();

        let err = dispatcher.navigate("#employee/unknown").await.unwrap_err();
        assert!(matches!(err, Error::RouteNotFound(_)));
        assert_eq!(dispatcher.view().rendered(), before);
        assert_eq!(dispatcher.view().active_icon(), Some(NavIcon::Window));
    }

    #[tokio::test]
    async fn list_rejection_renders_the_error_page_verbatim() {
        for message in ["Erreur 404", "Erreur 500"] {
            let store: Arc<dyn RemoteStore> = Arc::new(FailingStore::new(message));
            let dispatcher = dispatcher_with(Some(store));
            dispatcher.navigate("#employee/bills").await.unwrap();

            let displayed = dispatcher.view().rendered();
            assert!(displayed.contains("Erreur"));
            assert!(displayed.contains(message));
        }
    }

    #[tokio::test]
    async fn fetched_bills_render_sorted_with_display_fields() {
        let store: Arc<dyn RemoteStore> = Arc::new(MemoryStore::with_bills(vec![
            DraftBill {
                email: "a@a".to_string(),
                expense_type: ExpenseType::Transports,
                name: "test1".to_string(),
                amount: 100,
                date: "2001-01-01".to_string(),
                vat: "".to_string(),
                pct: 20,
                commentary: String::new(),
                file_url: None,
                file_name: None,
                status: BillStatus::Pending,
            }
            .into_bill("b1".to_string()),
            DraftBill {
                email: "a@a".to_string(),
                expense_type: ExpenseType::Services,
                name: "encore".to_string(),
                amount: 400,
                date: "2004-04-04".to_string(),
                vat: "".to_string(),
                pct: 20,
                commentary: String::new(),
                file_url: None,
                file_name: None,
                status: BillStatus::Refused,
            }
            .into_bill("b2".to_string()),
        ]));

        let dispatcher = dispatcher_with(Some(store));
        dispatcher.navigate("#employee/bills").await.unwrap();

        let content = dispatcher.view().content();
        let encore = content.find("encore").unwrap();
        let test1 = content.find("test1").unwrap();
        assert!(encore < test1, "most recent bill renders first");
        assert!(content.contains("4 Avr. 04"));
        assert!(content.contains("En attente"));
        assert!(content.contains("Refusé"));
    }

    #[tokio::test]
    async fn dashboard_is_the_admin_landing_view() {
        let dispatcher = Dispatcher::new(
            ViewHandle::new(),
            None,
            Session {
                user_type: UserType::Admin,
                email: "admin@test.tld".to_string(),
            },
        );
        dispatcher.navigate("#admin/dashboard").await.unwrap();
        assert_eq!(dispatcher.view().active_icon(), None);
        assert!(dispatcher.view().content().contains("Validations"));
    }
}
