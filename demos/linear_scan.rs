use compact_list::CompactList;

// Churn a list until its slots are thoroughly out of order, then linearize
// and address elements by logical position.
fn main() {
    let mut list: CompactList<u32> = CompactList::new();

    let mut slots = Vec::new();
    for v in 0..24 {
        slots.push(list.push_back(v));
    }
    for &slot in slots.iter().step_by(3) {
        list.erase(slot);
    }
    for v in 100..108 {
        list.push_front(v);
    }

    println!(
        "after churn: len={}, capacity={}, linear={}",
        list.len(),
        list.capacity(),
        list.is_linear()
    );

    list.linearize();
    println!(
        "after linearize: len={}, capacity={}, linear={}",
        list.len(),
        list.capacity(),
        list.is_linear()
    );

    // Random access by position is a single addition now.
    for n in (0..list.len()).step_by(4) {
        let slot = list.element_by_number(n);
        println!("position {n:2} -> slot {slot:2} -> value {}", list.get(slot));
    }

    let total: u32 = list.iter().sum();
    println!("sum over a sequential scan: {total}");
}
