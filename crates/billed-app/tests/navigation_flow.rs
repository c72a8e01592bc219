use async_trait::async_trait;
use billed_app::{Dispatcher, NewBillContainer, ViewHandle};
use billed_store::{BillsResource, MemoryStore, RemoteStore};
use billed_types::{Bill, DraftBill, FileSelection, FileUpload, Session, UploadReceipt};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};

/// A new bill submitted through the creation flow comes back from the list
/// with the pending display status and its form values intact.
#[tokio::test]
async fn submitted_bill_round_trips_through_the_list() {
    let store = Arc::new(MemoryStore::new());
    let remote: Arc<dyn RemoteStore> = store.clone();
    let view = ViewHandle::new();
    let session = Session::employee("employee@billed.tld");
    let dispatcher = Dispatcher::new(view.clone(), Some(remote.clone()), session.clone());

    let mut container =
        NewBillContainer::new(view.clone(), dispatcher.navigator(), Some(remote), session);
    container
        .handle_change_file(FileSelection::new(
            "justificatif.png",
            "image/png",
            b"png".to_vec(),
        ))
        .await;
    container.form.name = "Séminaire billed".to_string();
    container.form.date = "2004-04-04".to_string();
    container.form.amount = "400".to_string();
    container.form.vat = "80".to_string();
    container.form.pct = "20".to_string();
    container.form.commentary = "séminaire".to_string();

    container.handle_submit().await.unwrap();

    // Landed back on the list, re-fetched from the store.
    let displayed = view.rendered();
    assert!(displayed.contains("Mes notes de frais"));
    assert!(displayed.contains("Séminaire billed"));
    assert!(displayed.contains("400 €"));
    assert!(displayed.contains("4 Avr. 04"));
    assert!(displayed.contains("En attente"));

    let stored = store.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].date, "2004-04-04");
}

/// Store whose list blocks until the test releases it, to interleave a
/// navigation with an in-flight fetch.
struct GatedStore {
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

#[async_trait]
impl BillsResource for GatedStore {
    async fn list(&self) -> billed_store::Result<Vec<Bill>> {
        let gate = self.gate.lock().await.take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        Ok(vec![DraftBill {
            email: "a@a".to_string(),
            expense_type: Default::default(),
            name: "arrivée tardive".to_string(),
            amount: 1,
            date: "2020-01-01".to_string(),
            vat: String::new(),
            pct: 20,
            commentary: String::new(),
            file_url: None,
            file_name: None,
            status: Default::default(),
        }
        .into_bill("late".to_string())])
    }

    async fn create(&self, draft: DraftBill) -> billed_store::Result<Bill> {
        Ok(draft.into_bill("x".to_string()))
    }

    async fn update(&self, id: &str, bill: Bill) -> billed_store::Result<Bill> {
        let _ = id;
        Ok(bill)
    }
}

#[async_trait]
impl RemoteStore for GatedStore {
    fn bills(&self) -> &dyn BillsResource {
        self
    }

    async fn upload(&self, _upload: FileUpload) -> billed_store::Result<UploadReceipt> {
        Ok(UploadReceipt {
            file_url: "gated://unused".to_string(),
            key: "unused".to_string(),
        })
    }
}

/// A fetch that resolves after the user navigated away must not overwrite
/// the now-mounted view.
#[tokio::test]
async fn stale_fetch_resolution_is_a_no_op_after_navigation() {
    let (release, gate) = oneshot::channel();
    let store: Arc<dyn RemoteStore> = Arc::new(GatedStore {
        gate: Mutex::new(Some(gate)),
    });

    let view = ViewHandle::new();
    let dispatcher = Arc::new(Dispatcher::new(
        view.clone(),
        Some(store),
        Session::employee("a@a"),
    ));

    // First navigation parks on the gated list call; the loading page is
    // mounted meanwhile.
    let first = {
        let dispatcher = Arc::clone(&dispatcher);
        tokio::spawn(async move { dispatcher.navigate("#employee/bills").await })
    };
    tokio::task::yield_now().await;
    assert!(view.content().contains("Loading..."));

    // User moves on to the creation view while the fetch is in flight.
    dispatcher.navigate("#employee/bill/new").await.unwrap();
    assert!(view.content().contains("Envoyer une note de frais"));

    // The fetch now resolves; its write must be dropped.
    release.send(()).unwrap();
    first.await.unwrap().unwrap();

    assert!(view.content().contains("Envoyer une note de frais"));
    assert!(!view.content().contains("arrivée tardive"));
}
