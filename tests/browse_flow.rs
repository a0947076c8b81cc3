//! End-to-end browsing through the public event API: load, filter, sort, page.

use std::collections::BTreeSet;
use zshelf::catalog::SortDirection;
use zshelf::domain::decode_listing;
use zshelf::ui::components::table_body_rows;
use zshelf::ui::StatusKind;
use zshelf::worker::{ShelfWorker, WorkerMessage, WorkerResponse};
use zshelf::{handle_event, initialize, Action, AppState, Config, Event, LoadStatus};

const LISTING: &str = r#"[
    {"id": 1, "title": "Classic Red Mug", "description": "Ceramic.", "price": 12,
     "category": {"name": "Kitchen"}, "images": ["[\"https://i.imgur.com/mug.jpeg\"]"]},
    {"id": 2, "title": "Blue Hoodie", "description": "Warm.", "price": 45.5,
     "category": {"name": "Clothes"}, "images": ["https://i.imgur.com/hoodie.jpeg"]},
    {"id": 3, "title": "red sneakers", "description": "Fast.", "price": 80,
     "category": null, "images": []}
]"#;

/// Tall enough that no page used here is windowed.
const PANE_ROWS: usize = 80;

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

/// Drives the full load flow, running the worker step inline.
fn loaded_state(body: &str) -> AppState {
    let mut state = initialize(&Config::default());

    let (_, actions) = send(&mut state, Event::PermissionsGranted);
    assert!(matches!(actions.as_slice(), [Action::FetchProducts { .. }]));

    let (_, actions) = send(
        &mut state,
        Event::FetchCompleted { status: 200, body: body.as_bytes().to_vec() },
    );
    let [Action::PostToWorker(message)] = actions.as_slice() else {
        panic!("expected a worker message, got {actions:?}");
    };

    let response = ShelfWorker.handle_message(message.clone());
    let (render, _) = send(&mut state, Event::WorkerResponse(response));
    assert!(render);
    state
}

fn titles(state: &AppState) -> Vec<String> {
    state.compute_viewmodel(PANE_ROWS).rows.into_iter().map(|r| r.title).collect()
}

#[test]
fn load_renders_first_page_with_presentation_rules() {
    let state = loaded_state(LISTING);
    assert_eq!(state.load_status, LoadStatus::Ready);

    let vm = state.compute_viewmodel(PANE_ROWS);
    assert!(vm.status_screen.is_none());
    assert!(vm.pager.is_none());
    assert_eq!(vm.rows.len(), 3);
    assert_eq!(vm.rows[0].price, "$12");
    assert_eq!(vm.rows[0].image_url, "https://i.imgur.com/mug.jpeg");
    assert_eq!(vm.rows[2].category, "N/A");
    assert!(vm.rows[2].image_url.starts_with("https://placehold.co/"));
}

#[test]
fn filter_then_sort_then_clear() {
    let mut state = loaded_state(LISTING);

    send(&mut state, Event::SearchMode);
    for c in " RED ".chars() {
        send(&mut state, Event::Char(c));
    }
    send(&mut state, Event::CommitSearch);
    assert_eq!(titles(&state), ["Classic Red Mug", "red sneakers"]);

    send(
        &mut state,
        Event::Sort { column: "price".to_string(), direction: SortDirection::Descending },
    );
    assert_eq!(titles(&state), ["red sneakers", "Classic Red Mug"]);

    send(&mut state, Event::ClearFilter);
    assert_eq!(titles(&state), ["red sneakers", "Blue Hoodie", "Classic Red Mug"]);
}

fn numbered_listing(count: u32) -> String {
    serde_json::to_string(
        &(1..=count)
            .map(|i| serde_json::json!({"id": i, "title": format!("Item {i:02}"), "price": i}))
            .collect::<Vec<_>>(),
    )
    .unwrap()
}

#[test]
fn paging_across_a_large_listing() {
    let body = numbered_listing(25);
    let mut state = loaded_state(&body);
    assert_eq!(decode_listing(&body).unwrap().len(), 25);

    for _ in 0..5 {
        send(&mut state, Event::NextPage);
    }
    let vm = state.compute_viewmodel(PANE_ROWS);
    let pager = vm.pager.unwrap();
    assert_eq!((pager.current_page, pager.total_pages), (3, 3));
    assert_eq!(vm.rows.len(), 5);
    assert_eq!(vm.rows[0].title, "Item 21");
    assert_eq!(pager.range_label, "Showing 5 of 25 results");

    send(&mut state, Event::PageSizeUp);
    let pager = state.compute_viewmodel(PANE_ROWS).pager.unwrap();
    assert_eq!((pager.current_page, pager.total_pages), (1, 2));

    send(&mut state, Event::PageSizeUp);
    assert!(state.compute_viewmodel(PANE_ROWS).pager.is_none());
}

#[test]
fn short_pane_scrolls_through_every_row() {
    let mut state = loaded_state(&numbered_listing(60));
    send(&mut state, Event::SetPageSize(50));

    let rows = 24;
    let mut seen = BTreeSet::new();
    loop {
        let vm = state.compute_viewmodel(rows);
        assert!(vm.rows.len() <= table_body_rows(rows, false));
        seen.extend(vm.rows.into_iter().map(|r| r.title));
        if send(&mut state, Event::CursorDown).0 {
            continue;
        }
        if !send(&mut state, Event::NextPage).0 {
            break;
        }
    }
    assert_eq!(seen.len(), 60);
}

#[test]
fn malformed_listing_ends_in_error_screen() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::PermissionsGranted);
    let (_, actions) = send(
        &mut state,
        Event::FetchCompleted { status: 200, body: b"{\"not\": \"a list\"}".to_vec() },
    );
    let [Action::PostToWorker(message)] = actions.as_slice() else {
        panic!("expected a worker message");
    };

    let response = ShelfWorker.handle_message(message.clone());
    assert!(matches!(response, WorkerResponse::Error { .. }));
    send(&mut state, Event::WorkerResponse(response));

    let status = state.compute_viewmodel(PANE_ROWS).status_screen.unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.message, "Failed to load data. Please try again later.");
}

#[test]
fn worker_message_survives_json_transport() {
    let message = WorkerMessage::decode_products(LISTING.to_string());
    let payload = serde_json::to_string(&message).unwrap();
    let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded, message);
}
