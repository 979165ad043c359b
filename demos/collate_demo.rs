//! Demonstration of the collation pipeline
//!
//! This example shows how to:
//! 1. Split a mixed paste into candidate blocks
//! 2. Recognize and parse each block with the first matching format
//! 3. Order, deduplicate, aggregate and render the result

use puzzlefmt::parser::{BlockSegmenter, FormatRegistry, PuzzleManager};

fn main() {
    println!("=== Puzzle Collation Demo ===\n");

    // Puzzles pasted out of order, with one duplicate and two Pips difficulties
    let paste = r#"Wordle 1,692 4/6

🟩⬛🟩⬛⬛
⬛⬛⬛⬛⬛
🟩🟨🟩⬛⬛
🟩🟩🟩🟩🟩

https://www.nytimes.com/games/wordle

Pips #171 Hard 🔴
35:28

"Quolture"  1447  ⭐️3

🎬: ⬜️⬜️5️⃣
📺: ⬜️🟩0️⃣

https://www.quolture.com

Framed #1427
🎥 🟥 🟥 🟥 🟥 🟥 🟥

https://framed.wtf

Pips #171 Easy 🟢
1:25

Framed #1427
🎥 🟥 🟥 🟥 🟥 🟥 🟥

https://framed.wtf"#;

    println!("Input:\n{paste}\n");
    println!("---\n");

    // Step 1: Segment
    let registry = FormatRegistry::builtin();
    let segmenter = BlockSegmenter::from_registry(&registry);
    let blocks = segmenter.segment(paste);

    println!("Segmented {} blocks:\n", blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        let kind = registry
            .find_for_text(block)
            .map_or("unrecognized", |format| format.kind().id());
        println!("  Block {i}: {kind}");
    }
    println!();

    // Step 2: Run the whole pipeline
    let manager = PuzzleManager::default();
    let puzzles = manager.collate(paste);

    println!("Collated {} puzzles:\n", puzzles.len());
    for puzzle in &puzzles {
        let marker = if puzzle.is_aggregate() { " (combined)" } else { "" };
        println!("  {}{marker}", puzzle.kind.name());
    }
    println!();

    // Step 3: Render
    println!("Output:\n{}", manager.format_output(&puzzles));
}
