//! Builds a small tree, prints its ordered queries and shape, then removes
//! most of its keys. Run with `cargo run -p llrb --example walkthrough`.

use std::error::Error;

use llrb::{LlrbTree, Order};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut tree = LlrbTree::new();
    for k in [5, 4, 3, 2, 1, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16] {
        tree.insert(k, k);
    }
    info!("built tree with {} entries", tree.len());

    println!("{tree:?}");
    println!("Value of key 4: {:?}", tree.get(&4));
    println!("Height of tree is: {}", tree.height());
    println!("Max: {:?}", tree.max());
    println!("Min: {:?}", tree.min());
    println!("Element of rank 2: {:?}", tree.select(2));
    println!("Rank of key 3: {}", tree.rank(&3));
    println!("Floor of key 7: {:?}", tree.floor(&7));
    println!("Ceiling of key 0: {:?}", tree.ceiling(&0));
    println!("Tree is a BST: {}", tree.is_bst());
    println!("Tree sizes are correct: {}", tree.is_size_consistent());
    println!("Is 2-3 tree: {}", tree.is_23());
    println!("Is balanced tree: {}", tree.is_balanced());
    tree.check_integrity()?;

    let mut pre = Vec::new();
    tree.traverse(Order::PreOrder, |_, v| pre.push(*v));
    println!("Pre order: {pre:?}");
    let ascending: Vec<i32> = tree.values().copied().collect();
    println!("In order: {ascending:?}");

    println!("{}", tree.render_ascii_with(2, 2));

    for k in [2, 10, 4, 11, 16, 8, 1, 12, 5, 3] {
        tree.remove(&k);
        tree.check_integrity()?;
    }
    info!("{} entries left after removals", tree.len());

    println!("{}", tree.render_ascii());
    Ok(())
}
