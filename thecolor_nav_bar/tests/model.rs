// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests: a controller tree against a flat reference model.
//!
//! The model keeps every entry in one list with its owning node and push
//! order, and computes each node's effective appearance by brute force over
//! the node's subtree. The tree below is fixed:
//!
//! ```text
//! 0 ─┬─ 1 ── 3 ── 4
//!    └─ 2
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use thecolor_color::Color;
use thecolor_nav_bar::{NavBarAppearance, NavBarAppearanceController, Setting};

const PARENTS: [Option<usize>; 5] = [None, Some(0), Some(0), Some(1), Some(3)];

#[derive(Clone, Debug)]
enum Op {
    Push {
        node: usize,
        appearance: NavBarAppearance,
        tag: Option<u8>,
    },
    Peel(usize),
    Remove(usize, u8),
    Clear(usize),
}

#[derive(Default)]
struct Model {
    /// `(node, appearance, tag)` in push order.
    entries: Vec<(usize, NavBarAppearance, Option<u8>)>,
}

impl Model {
    fn is_in_subtree(mut node: usize, root: usize) -> bool {
        loop {
            if node == root {
                return true;
            }
            match PARENTS[node] {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn apply(&mut self, op: &Op) {
        match *op {
            Op::Push {
                node,
                appearance,
                tag,
            } => self.entries.push((node, appearance, tag)),
            Op::Peel(node) => {
                if let Some(i) = self.entries.iter().rposition(|e| e.0 == node) {
                    self.entries.remove(i);
                }
            }
            Op::Remove(node, tag) => {
                if let Some(i) = self
                    .entries
                    .iter()
                    .rposition(|e| e.0 == node && e.2 == Some(tag))
                {
                    self.entries.remove(i);
                }
            }
            Op::Clear(node) => self
                .entries
                .retain(|e| !Self::is_in_subtree(e.0, node)),
        }
    }

    fn effective(&self, node: usize) -> Option<NavBarAppearance> {
        self.entries
            .iter()
            .filter(|e| Self::is_in_subtree(e.0, node))
            .fold(None, |below, e| {
                Some(match below {
                    Some(below) => e.1.over(below),
                    None => e.1,
                })
            })
    }
}

fn build_tree() -> Vec<NavBarAppearanceController<u8>> {
    let mut nodes: Vec<NavBarAppearanceController<u8>> = Vec::new();
    for (i, parent) in PARENTS.iter().enumerate() {
        let node = match parent {
            None => NavBarAppearanceController::root(),
            Some(p) => nodes[*p].branch(format!("n{i}")),
        };
        nodes.push(node);
    }
    nodes
}

fn setting<T: std::fmt::Debug + Clone + 'static>(
    value: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = Setting<T>> {
    prop::option::of(value).prop_map(Setting::from)
}

fn appearance() -> impl Strategy<Value = NavBarAppearance> {
    (
        setting((0_u32..4).prop_map(Color::from_argb)),
        setting(any::<bool>()),
    )
        .prop_map(|(color, use_light_tint_for_controls)| NavBarAppearance {
            color,
            use_light_tint_for_controls,
        })
}

fn op() -> impl Strategy<Value = Op> {
    let node = 0_usize..PARENTS.len();
    prop_oneof![
        4 => (node.clone(), appearance(), prop::option::of(0_u8..3)).prop_map(
            |(node, appearance, tag)| Op::Push {
                node,
                appearance,
                tag
            }
        ),
        2 => node.clone().prop_map(Op::Peel),
        2 => (node.clone(), 0_u8..3).prop_map(|(node, tag)| Op::Remove(node, tag)),
        1 => node.prop_map(Op::Clear),
    ]
}

fn apply(nodes: &[NavBarAppearanceController<u8>], op: &Op) {
    match *op {
        Op::Push {
            node,
            appearance,
            tag,
        } => match tag {
            Some(tag) => nodes[node].push(appearance.with_tag(tag)),
            None => nodes[node].push(appearance),
        },
        Op::Peel(node) => nodes[node].peel(),
        Op::Remove(node, tag) => nodes[node].remove(&tag),
        Op::Clear(node) => nodes[node].clear(),
    }
}

proptest! {
    #[test]
    fn every_node_matches_the_model(ops in prop::collection::vec(op(), 0..40)) {
        let nodes = build_tree();
        let mut model = Model::default();
        for op in &ops {
            apply(&nodes, op);
            model.apply(op);
            for (i, node) in nodes.iter().enumerate() {
                prop_assert_eq!(node.effective(), model.effective(i), "node {} after {:?}", i, op);
            }
        }
    }

    #[test]
    fn root_emits_exactly_on_change(ops in prop::collection::vec(op(), 0..40)) {
        let nodes = build_tree();
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        let _sub = nodes[0].subscribe(move |a| sink.borrow_mut().push(a.copied()));

        let mut model = Model::default();
        let mut expected = vec![None];
        for op in &ops {
            apply(&nodes, op);
            model.apply(op);
            let now = model.effective(0);
            if expected.last() != Some(&now) {
                expected.push(now);
            }
        }
        prop_assert_eq!(&*emitted.borrow(), &expected);
    }
}
