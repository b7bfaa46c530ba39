//! Depth-first traversal of block trees.
//!
//! Conditional blocks can nest without limit, so traversal keeps an
//! explicit stack instead of recursing.

use std::slice;

use uikit_schema::{Block, BlockElement};

/// Pre-order iterator over blocks and their conditional children.
///
/// Yields each block with its nesting depth (0 for top-level blocks).
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(usize, slice::Iter<'a, Block>)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Block);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, iter) = self.stack.last_mut()?;
            let depth = *depth;

            match iter.next() {
                Some(block) => {
                    let children = block.children();
                    if !children.is_empty() {
                        self.stack.push((depth + 1, children.iter()));
                    }
                    return Some((depth, block));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Walk `blocks` depth-first, descending into conditional render trees.
pub fn walk(blocks: &[Block]) -> Walk<'_> {
    Walk {
        stack: vec![(0, blocks.iter())],
    }
}

/// Find the first block with the given id, at any depth.
pub fn find_block<'a>(blocks: &'a [Block], block_id: &str) -> Option<&'a Block> {
    walk(blocks)
        .map(|(_, block)| block)
        .find(|block| block.block_id() == block_id)
}

/// Find the element carrying `action_id` together with the block holding it.
pub fn find_action<'a>(
    blocks: &'a [Block],
    action_id: &str,
) -> Option<(&'a Block, &'a BlockElement)> {
    walk(blocks)
        .flat_map(|(_, block)| block.elements().into_iter().map(move |e| (block, e)))
        .find(|(_, element)| element.action_id() == Some(action_id))
}

/// Every action id in document order.
pub fn action_ids(blocks: &[Block]) -> Vec<&str> {
    walk(blocks)
        .flat_map(|(_, block)| block.elements())
        .filter_map(BlockElement::action_id)
        .collect()
}
