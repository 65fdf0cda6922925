use std::collections::HashSet;

use tracing::{debug, trace};

use crate::models::{AnnotatedDish, Menu, MenuLineItem, MenuSet};
use crate::planner::constants::MAX_MENUS;
use crate::planner::request::normalize_labels;

/// Remaining candidates for one requested course, highest total cost first.
#[derive(Debug)]
struct CoursePool<'a> {
    course: String,
    candidates: Vec<AnnotatedDish<'a>>,
}

/// Per-course candidate lists in request order, sorted once and consumed by successive attempts.
#[derive(Debug)]
pub struct CoursePools<'a> {
    pools: Vec<CoursePool<'a>>,
}

impl<'a> CoursePools<'a> {
    /// Group `pool` by requested course. Within a course, equal costs keep catalog order.
    pub fn new<S: AsRef<str>>(pool: &[AnnotatedDish<'a>], course_types: &[S]) -> Self {
        let pools = normalize_labels(course_types)
            .into_iter()
            .map(|course| {
                let mut candidates: Vec<AnnotatedDish<'a>> = pool
                    .iter()
                    .filter(|annotated| annotated.dish.course_key() == course)
                    .copied()
                    .collect();
                // Stable sort: ties stay in the order the filter produced, which is catalog order.
                candidates.sort_by(|a, b| b.total_cost.total_cmp(&a.total_cost));
                CoursePool { course, candidates }
            })
            .collect();

        Self { pools }
    }

    /// First requested course with no candidates left, if any.
    pub fn exhausted_course(&self) -> Option<&str> {
        self.pools
            .iter()
            .find(|pool| pool.candidates.is_empty())
            .map(|pool| pool.course.as_str())
    }

    /// Total candidates still available across all courses.
    pub fn remaining(&self) -> usize {
        self.pools.iter().map(|pool| pool.candidates.len()).sum()
    }

    /// Build one menu under `budget`, taking for each course the costliest dish that still fits.
    ///
    /// Returns `None` when some course cannot be filled; partial menus are never returned.
    pub fn attempt(&self, budget: f64) -> Option<Vec<AnnotatedDish<'a>>> {
        let mut remaining_budget = budget;
        let mut picked = Vec::with_capacity(self.pools.len());

        for pool in &self.pools {
            let Some(choice) = pool
                .candidates
                .iter()
                .find(|candidate| candidate.total_cost <= remaining_budget)
            else {
                debug!(
                    course = %pool.course,
                    remaining_budget,
                    "no dish fits the remaining budget"
                );
                return None;
            };

            remaining_budget -= choice.total_cost;
            trace!(
                course = %pool.course,
                dish = %choice.dish.name,
                cost = choice.total_cost,
                remaining_budget,
                "selected dish"
            );
            picked.push(*choice);
        }

        Some(picked)
    }

    /// Drop the picked dishes from every course, including duplicate rows of the same dish.
    pub fn remove_picked(&mut self, picked: &[AnnotatedDish<'a>]) {
        let rows: HashSet<usize> = picked.iter().map(|annotated| annotated.row).collect();
        let keys: HashSet<(String, String)> =
            picked.iter().map(|annotated| annotated.dish.key()).collect();

        for pool in &mut self.pools {
            pool.candidates.retain(|candidate| {
                !rows.contains(&candidate.row) && !keys.contains(&candidate.dish.key())
            });
        }
    }
}

/// Greedily build up to `MAX_MENUS` menus that share no dish.
///
/// Stops as soon as a course runs out of candidates or an attempt fails. A failed attempt leaves
/// the pools untouched, so repeating it could never succeed.
pub fn select_menus<S: AsRef<str>>(
    pool: &[AnnotatedDish<'_>],
    course_types: &[S],
    budget: f64,
) -> MenuSet {
    let mut pools = CoursePools::new(pool, course_types);
    let mut menus = Vec::new();

    if pools.pools.is_empty() {
        return MenuSet { menus };
    }

    while menus.len() < MAX_MENUS {
        if let Some(course) = pools.exhausted_course() {
            debug!(course, menus = menus.len(), "course exhausted, stopping");
            break;
        }

        let Some(picked) = pools.attempt(budget) else {
            debug!(menus = menus.len(), "attempt rejected, stopping");
            break;
        };

        pools.remove_picked(&picked);

        let menu = Menu::new(picked.iter().map(MenuLineItem::from).collect());
        debug!(
            index = menus.len() + 1,
            total_cost = menu.total_cost,
            remaining = pools.remaining(),
            "accepted menu"
        );
        menus.push(menu);
    }

    MenuSet { menus }
}
