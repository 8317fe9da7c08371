use super::*;

fn book(id: i64, inventory_count: i64) -> Book {
    Book {
        id,
        title: format!("Book {id}"),
        author: "Anon".to_owned(),
        description: String::new(),
        image_path: None,
        inventory_count,
    }
}

#[test]
fn signed_out_wins_over_any_outcome() {
    assert_eq!(BookListView::resolve(false, None), BookListView::SignedOut);
    assert_eq!(
        BookListView::resolve(false, Some(Ok(vec![book(1, 1)]))),
        BookListView::SignedOut
    );
}

#[test]
fn pending_fetch_is_loading() {
    assert_eq!(BookListView::resolve(true, None), BookListView::Loading);
}

#[test]
fn unauthorized_response_renders_error_string() {
    let view = BookListView::resolve(true, Some(Err(ApiError::Status { status: 401, message: None })));
    assert_eq!(
        view,
        BookListView::Failed("Error: Error fetching books: Request failed with status code 401".to_owned())
    );
}

#[test]
fn network_and_decode_failures_share_the_same_shape() {
    let net = BookListView::resolve(true, Some(Err(ApiError::Network("Network Error".to_owned()))));
    assert_eq!(net, BookListView::Failed("Error: Error fetching books: Network Error".to_owned()));

    let decode = BookListView::resolve(true, Some(Err(ApiError::Decode("expected array".to_owned()))));
    let BookListView::Failed(text) = decode else {
        panic!("expected failure view");
    };
    assert!(text.starts_with("Error: Error fetching books: "));
}

#[test]
fn empty_collection_is_distinct_from_loaded() {
    assert_eq!(BookListView::resolve(true, Some(Ok(Vec::new()))), BookListView::Empty);
}

#[test]
fn loaded_keeps_server_order() {
    let view = BookListView::resolve(true, Some(Ok(vec![book(3, 0), book(1, 2)])));
    let BookListView::Loaded(books) = view else {
        panic!("expected loaded view");
    };
    assert_eq!(books.iter().map(|b| b.id).collect::<Vec<_>>(), vec![3, 1]);
}
