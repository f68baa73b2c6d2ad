use log::debug;
use rand::Rng;

use super::{pick, variant_number, CANONICAL_COUNT, RECORDS_PER_KIND};
use crate::model::{Difficulty, Recipe};

/// Regions a variant can be attributed to.  Repeated entries weight the draw.
pub const REGIONS: &[&str] = &[
    "Eastern Europe",
    "Southern Italy",
    "Southeast Asia",
    "Northern India",
    "Western Mexico",
    "Southern France",
    "Northern China",
    "Eastern Europe",
    "Southern Italy",
    "Western Mexico",
];

/// Cooking times a variant can be given.
pub const TIMES: &[&str] = &[
    "15 minutes",
    "30 minutes",
    "45 minutes",
    "1 hour",
    "1.5 hours",
    "2 hours",
];

/// The hand-written recipes that open every generated list.
pub fn canonical_recipes() -> [Recipe; CANONICAL_COUNT] {
    [
        Recipe::new(
            "Beef Goulash",
            "Eastern Europe",
            "2 hours",
            Difficulty::Medium,
            "4-6",
        )
        .with_ingredients([
            "2 lbs beef chuck",
            "2 onions",
            "3 tbsp paprika",
            "2 cups beef broth",
        ])
        .with_instructions([
            "Brown the beef in oil",
            "Add onions and cook until soft",
            "Add paprika and broth",
            "Simmer for 1.5 hours",
        ]),
        Recipe::new(
            "Pasta Carbonara",
            "Southern Italy",
            "30 minutes",
            Difficulty::Easy,
            "2-3",
        )
        .with_ingredients(["8 oz pasta", "4 eggs", "1 cup parmesan", "4 oz pancetta"])
        .with_instructions([
            "Cook pasta al dente",
            "Whisk eggs with cheese",
            "Cook pancetta until crispy",
            "Toss hot pasta with egg mixture",
        ]),
        Recipe::new(
            "Pad Thai",
            "Southeast Asia",
            "45 minutes",
            Difficulty::Medium,
            "3-4",
        )
        .with_ingredients([
            "8 oz rice noodles",
            "2 tbsp tamarind paste",
            "3 tbsp fish sauce",
            "2 eggs",
        ])
        .with_instructions([
            "Soak noodles in warm water",
            "Heat wok with oil",
            "Scramble eggs",
            "Add noodles and sauce",
        ]),
        Recipe::new(
            "Chicken Tikka Masala",
            "Northern India",
            "1 hour",
            Difficulty::Hard,
            "4-5",
        )
        .with_ingredients([
            "2 lbs chicken breast",
            "1 cup yogurt",
            "2 tbsp garam masala",
            "1 can tomatoes",
        ])
        .with_instructions([
            "Marinate chicken in yogurt",
            "Grill chicken pieces",
            "Make tomato sauce",
            "Combine chicken with sauce",
        ]),
        Recipe::new(
            "Fish Tacos",
            "Western Mexico",
            "25 minutes",
            Difficulty::Easy,
            "2-4",
        )
        .with_ingredients(["1 lb white fish", "8 corn tortillas", "1 cup cabbage", "1 lime"])
        .with_instructions([
            "Season and grill fish",
            "Warm tortillas",
            "Shred cabbage",
            "Assemble tacos with lime",
        ]),
    ]
}

/// Builds the derived recipe for list position `index` from its canonical base.
///
/// Region, difficulty and time are drawn in that order.
pub fn derive_recipe<R>(base: &Recipe, index: usize, rng: &mut R) -> Recipe
where
    R: Rng + ?Sized,
{
    let name = format!("{} Variation {}", base.name(), variant_number(index));
    let region = *pick(rng, REGIONS);
    let difficulty = *pick(rng, Difficulty::ALL);
    let time = *pick(rng, TIMES);
    debug!("Derived recipe '{name}': region={region}, difficulty={difficulty}, time={time}");

    base.clone()
        .with_name(name)
        .with_region(region)
        .with_difficulty(difficulty)
        .with_time(time)
}

/// Returns the canonical recipes followed by randomized variations.
pub fn generate_recipes<R>(rng: &mut R) -> Vec<Recipe>
where
    R: Rng + ?Sized,
{
    let canonical = canonical_recipes();
    let mut recipes = Vec::with_capacity(RECORDS_PER_KIND);
    recipes.extend(canonical.iter().cloned());
    for index in CANONICAL_COUNT..RECORDS_PER_KIND {
        let base = &canonical[index % CANONICAL_COUNT];
        recipes.push(derive_recipe(base, index, rng));
    }
    recipes
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{generate_recipes, REGIONS, TIMES};
    use crate::model::Difficulty;
    use crate::samples::{CANONICAL_COUNT, RECORDS_PER_KIND};

    #[test]
    fn canonical_recipes_open_every_list() {
        let expected = [
            ("Beef Goulash", "Eastern Europe", "2 hours", Difficulty::Medium, "4-6"),
            ("Pasta Carbonara", "Southern Italy", "30 minutes", Difficulty::Easy, "2-3"),
            ("Pad Thai", "Southeast Asia", "45 minutes", Difficulty::Medium, "3-4"),
            ("Chicken Tikka Masala", "Northern India", "1 hour", Difficulty::Hard, "4-5"),
            ("Fish Tacos", "Western Mexico", "25 minutes", Difficulty::Easy, "2-4"),
        ];

        let recipes = generate_recipes(&mut StepRng::new(7, 13));
        assert_eq!(recipes.len(), RECORDS_PER_KIND);
        for (recipe, (name, region, time, difficulty, serves)) in recipes.iter().zip(expected) {
            assert_eq!(recipe.name(), name);
            assert_eq!(recipe.region(), region);
            assert_eq!(recipe.time(), time);
            assert_eq!(recipe.difficulty(), difficulty);
            assert_eq!(recipe.serves(), serves);
        }
        assert_eq!(recipes[0].ingredients()[2], "3 tbsp paprika");
    }

    #[test]
    fn variations_cycle_through_bases() {
        let recipes = generate_recipes(&mut StdRng::seed_from_u64(11));
        assert_eq!(recipes[5].name(), "Beef Goulash Variation 1");
        assert_eq!(recipes[9].name(), "Fish Tacos Variation 5");
        assert_eq!(recipes[14].name(), "Fish Tacos Variation 10");

        // Lists and serving sizes are inherited from the base.
        assert_eq!(recipes[7].ingredients(), recipes[2].ingredients());
        assert_eq!(recipes[7].instructions(), recipes[2].instructions());
        assert_eq!(recipes[7].serves(), recipes[2].serves());
    }

    #[test]
    fn derived_names_are_unique_and_differ_from_base() {
        let recipes = generate_recipes(&mut rand::thread_rng());
        for (index, recipe) in recipes.iter().enumerate().skip(CANONICAL_COUNT) {
            assert_ne!(recipe.name(), recipes[index % CANONICAL_COUNT].name());
        }
        let names: HashSet<_> = recipes.iter().map(|recipe| recipe.name()).collect();
        assert_eq!(names.len(), RECORDS_PER_KIND);
    }

    #[test]
    fn zero_source_selects_first_candidates() {
        let recipes = generate_recipes(&mut StepRng::new(0, 0));
        for recipe in &recipes[CANONICAL_COUNT..] {
            assert_eq!(recipe.region(), REGIONS[0]);
            assert_eq!(recipe.difficulty(), Difficulty::Easy);
            assert_eq!(recipe.time(), TIMES[0]);
        }
    }

    #[test]
    fn randomized_fields_come_from_candidate_sets() {
        let recipes = generate_recipes(&mut StdRng::seed_from_u64(42));
        for recipe in &recipes[CANONICAL_COUNT..] {
            assert!(REGIONS.contains(&recipe.region()));
            assert!(TIMES.contains(&recipe.time()));
        }
    }

    #[test]
    fn same_seed_gives_same_recipes() {
        let first = generate_recipes(&mut StdRng::seed_from_u64(2024));
        let second = generate_recipes(&mut StdRng::seed_from_u64(2024));
        assert_eq!(first, second);
    }
}
