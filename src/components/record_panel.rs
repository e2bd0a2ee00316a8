//! Record Panel Component
//!
//! Transaction table with an input row: ADD posts the draft, DEL clears the table.
//! Each action is followed by a fresh read of the whole list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use record_sync::{DraftField, RecordManager};

use crate::api::HttpTransactionApi;
use crate::context::use_app_context;
use crate::store::PanelStore;

pub const PANEL_TITLE: &str = "Aurora Database Demo Page";

type PanelManager = RecordManager<HttpTransactionApi, PanelStore>;

#[component]
pub fn RecordPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = PanelStore::default();
    let manager = move || -> PanelManager {
        RecordManager::new(HttpTransactionApi::new(&ctx.config()), store)
    };

    // Initial load with retry
    Effect::new(move |_| {
        let manager = manager();
        spawn_local(async move {
            manager.load_initial().await;
        });
    });

    let on_add = move |_: ()| {
        let manager = manager();
        spawn_local(async move {
            manager.add().await;
        });
    };

    let on_clear = move |_: ()| {
        let manager = manager();
        spawn_local(async move {
            manager.clear_all().await;
        });
    };

    let on_edit = move |(field, value): (DraftField, String)| manager().edit(field, value);

    view! {
        <RecordTable store=store on_add=on_add on_clear=on_clear on_edit=on_edit />
    }
}

/// Table body mirrors `store`; the callbacks decide what the buttons and inputs do.
#[component]
pub fn RecordTable(
    store: PanelStore,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_clear: Callback<()>,
    #[prop(into)] on_edit: Callback<(DraftField, String)>,
) -> impl IntoView {
    view! {
        <div class="record-panel">
            <h1>{PANEL_TITLE}</h1>
            <table class="record-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"AMOUNT"</th>
                        <th>"DESC"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || store.records().into_iter().map(|record| view! {
                        <tr class="record-row">
                            <td>{record.id}</td>
                            <td>{record.amount}</td>
                            <td>{record.description}</td>
                            <td></td>
                        </tr>
                    }).collect_view()}
                    <tr class="input-row">
                        <td></td>
                        <td>
                            <input
                                type="text"
                                aria-label="Amount"
                                prop:value=move || store.draft_value().amount
                                on:input=move |ev| on_edit.run((DraftField::Amount, event_target_value(&ev)))
                            />
                        </td>
                        <td>
                            <input
                                type="text"
                                aria-label="Description"
                                prop:value=move || store.draft_value().description
                                on:input=move |ev| on_edit.run((DraftField::Description, event_target_value(&ev)))
                            />
                        </td>
                        <td>
                            <button type="button" on:click=move |_| on_add.run(())>"ADD"</button>
                            <button type="button" on:click=move |_| on_clear.run(())>"DEL"</button>
                        </td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use record_sync::{DraftInput, PanelState, Record};
    use wasm_bindgen_test::*;

    fn record(id: u64, amount: &str, description: &str) -> Record {
        Record {
            id,
            amount: amount.to_string(),
            description: description.to_string(),
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
        }
    }

    fn texts(selector: &str) -> Vec<String> {
        let nodes = document().query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .map(|node| node.text_content().unwrap_or_default())
            .collect()
    }

    #[wasm_bindgen_test]
    fn table_renders_one_row_per_record_plus_input_row() {
        mount_to_body(|| {
            let store = PanelStore::default();
            store.replace_records(vec![
                record(1, "100", "Transaction 1"),
                record(2, "200", "Transaction 2"),
                record(3, "300", "Transaction 3"),
            ]);
            store.set_draft(DraftInput {
                amount: "150".to_string(),
                description: "New Transaction".to_string(),
            });
            view! {
                <RecordTable store=store on_add=|_: ()| {} on_clear=|_: ()| {} on_edit=|_: (DraftField, String)| {} />
            }
        });

        assert_eq!(texts(".record-panel h1"), vec![PANEL_TITLE]);
        assert_eq!(texts(".record-table thead th"), vec!["ID", "AMOUNT", "DESC", ""]);
        assert_eq!(texts(".record-table tbody tr").len(), 4);
        assert_eq!(texts(".record-table tr.input-row").len(), 1);
        assert_eq!(
            texts(".record-table tr.record-row td"),
            vec![
                "1", "100", "Transaction 1", "",
                "2", "200", "Transaction 2", "",
                "3", "300", "Transaction 3", "",
            ]
        );

        let table = texts(".record-table").concat();
        assert!(!table.contains("2024-01-01"));

        assert_eq!(texts(".record-table input[type=\"text\"]").len(), 2);
        assert_eq!(texts(".record-table button"), vec!["ADD", "DEL"]);
    }
}
