use dyn_array::{DynArray, DynArrayError, by_length, length_comparator};

fn main() -> Result<(), DynArrayError> {
    println!("=== dyn_array basic usage ===\n");

    let mut scores = DynArray::new();
    println!("Empty array: size={}, capacity={}", scores.size(), scores.capacity());

    for s in [42, 7, 19, 3] {
        scores.append(s)?;
    }
    println!("After appends: {:?} (capacity {})", scores, scores.capacity());

    scores.insert_at(1, 100)?;
    println!("insert_at(1, 100): {:?}", scores);

    match scores.insert_at(scores.size(), 0) {
        Err(e) => println!("insert_at(size, 0) rejected: {}", e),
        Ok(()) => unreachable!(),
    }

    let removed = scores.remove_at(0)?;
    println!("remove_at(0) -> {}: {:?}", removed, scores);

    println!("contains(&19): {}", scores.contains(&19));
    println!("remove_by_value(&19): {}", scores.remove_by_value(&19));

    scores.sort();
    println!(
        "After sort: {:?} (capacity trimmed to {})",
        scores,
        scores.capacity()
    );

    // Ordering whole arrays
    let roomy = DynArray::<i32>::with_capacity(64)?;
    println!("\ncompare_to (by size): {}", scores.compare_to(&roomy));
    println!("length_comparator (by capacity): {}", length_comparator(&scores, &roomy));

    let mut shelf = vec![roomy, scores];
    shelf.sort_by(by_length);
    let capacities: Vec<usize> = shelf.iter().map(DynArray::capacity).collect();
    println!("Arrays sorted by capacity: {:?}", capacities);

    Ok(())
}
