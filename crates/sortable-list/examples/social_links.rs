//! Walks an editing session over a social-link list and prints snapshots.

use sortable_list::{OrderedList, Snapshot, SocialLink};

fn print_snapshot(label: &str, snap: &Snapshot<'_, SocialLink>) {
    println!("\n=== {} ===", label);
    for (i, entry) in snap.entries.iter().enumerate() {
        let marker = if snap.selected == Some(i) { ">" } else { " " };
        let url = if entry.item.url.is_empty() {
            "(no url)"
        } else {
            entry.item.url.as_str()
        };
        println!("{} [{}] {:12} {}  id={}", marker, i, entry.item.icon, url, entry.id);
    }
    match snap.selected {
        Some(i) => println!("selected: {}", i),
        None => println!("selected: none"),
    }
}

fn main() {
    let mut links: OrderedList<SocialLink> = OrderedList::new();

    // The user clicks "add link" twice and fills in URLs
    links.append_and_select(SocialLink::default());
    links.selected_item_mut().unwrap().url = "https://wordpress.org".to_string();
    links.append_and_select(SocialLink::new("twitter"));
    links.selected_item_mut().unwrap().url = "https://twitter.com/wp".to_string();
    print_snapshot("after adding two links", &links.snapshot());

    // Drag the twitter link to the front; selection follows it
    links.reorder(1, 0).unwrap();
    print_snapshot("after dragging twitter to the front", &links.snapshot());

    // Remove the (now second) wordpress link
    links.remove(1).unwrap();
    print_snapshot("after removing wordpress", &links.snapshot());

    // A removal past the end is rejected and changes nothing
    if let Err(err) = links.remove(5) {
        println!("\nrejected: {}", err);
    }

    // The block loses focus; the host reports container deselection
    links.container_deselected();
    print_snapshot("after container deselection", &links.snapshot());
}
