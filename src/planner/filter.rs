use crate::models::AnnotatedDish;

/// Keep dishes whose course was requested and whose diet matches, desserts excepted.
///
/// Labels in `course_types` and `diet_preferences` must already be normalized.
pub fn filter_dishes<'a, S: AsRef<str>>(
    dishes: &[AnnotatedDish<'a>],
    course_types: &[S],
    diet_preferences: &[S],
) -> Vec<AnnotatedDish<'a>> {
    dishes
        .iter()
        .filter(|annotated| {
            let course = annotated.dish.course_key();
            let diet = annotated.dish.diet_key();
            course_types.iter().any(|c| c.as_ref() == course)
                && (annotated.dish.is_dessert()
                    || diet_preferences.iter().any(|d| d.as_ref() == diet))
        })
        .copied()
        .collect()
}
