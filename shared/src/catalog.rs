//! Seed catalogs for the plan-browsing views.
//!
//! These stand in for rows the storage collaborator would serve; the
//! frontend reads them through the same client surface as persisted
//! records, so swapping in real persistence touches no view code.

use crate::{Difficulty, Exercise, Meal, NutritionPlan, WorkoutPlan};

const SEED_CREATED_AT: &str = "2024-01-01T00:00:00Z";

pub fn workout_plans() -> Vec<WorkoutPlan> {
    vec![
        WorkoutPlan {
            id: "1".to_string(),
            user_id: "user1".to_string(),
            name: "Beginner Workout - ABC".to_string(),
            description: "Basic program for people just getting started".to_string(),
            exercises: vec![
                Exercise {
                    id: "1".to_string(),
                    name: "Bench Press".to_string(),
                    sets: 3,
                    reps: 12,
                    rest_seconds: 60,
                    muscle_group: "Chest".to_string(),
                    illustration_url: Some("/exercises/bench-press.jpg".to_string()),
                },
                Exercise {
                    id: "2".to_string(),
                    name: "Lat Pulldown".to_string(),
                    sets: 3,
                    reps: 12,
                    rest_seconds: 60,
                    muscle_group: "Back".to_string(),
                    illustration_url: Some("/exercises/lat-pulldown.jpg".to_string()),
                },
                Exercise {
                    id: "3".to_string(),
                    name: "Squat".to_string(),
                    sets: 3,
                    reps: 15,
                    rest_seconds: 90,
                    muscle_group: "Legs".to_string(),
                    illustration_url: Some("/exercises/squat.jpg".to_string()),
                },
            ],
            difficulty: Difficulty::Beginner,
            duration_minutes: 45,
            created_at: SEED_CREATED_AT.to_string(),
        },
        WorkoutPlan {
            id: "2".to_string(),
            user_id: "user1".to_string(),
            name: "Intermediate Workout - Push/Pull".to_string(),
            description: "Advanced program for strength gains".to_string(),
            exercises: vec![
                Exercise {
                    id: "4".to_string(),
                    name: "Incline Dumbbell Press".to_string(),
                    sets: 4,
                    reps: 10,
                    rest_seconds: 90,
                    muscle_group: "Chest".to_string(),
                    illustration_url: Some("/exercises/incline-press.jpg".to_string()),
                },
                Exercise {
                    id: "5".to_string(),
                    name: "Bent-Over Row".to_string(),
                    sets: 4,
                    reps: 10,
                    rest_seconds: 90,
                    muscle_group: "Back".to_string(),
                    illustration_url: Some("/exercises/bent-over-row.jpg".to_string()),
                },
                Exercise {
                    id: "6".to_string(),
                    name: "Leg Press".to_string(),
                    sets: 4,
                    reps: 12,
                    rest_seconds: 60,
                    muscle_group: "Legs".to_string(),
                    illustration_url: Some("/exercises/leg-press.jpg".to_string()),
                },
            ],
            difficulty: Difficulty::Intermediate,
            duration_minutes: 60,
            created_at: SEED_CREATED_AT.to_string(),
        },
    ]
}

pub fn nutrition_plans() -> Vec<NutritionPlan> {
    vec![
        NutritionPlan {
            id: "1".to_string(),
            name: "Weight Loss Plan".to_string(),
            description: "Balanced diet for healthy weight loss".to_string(),
            meals: vec![
                Meal {
                    meal_type: "Breakfast".to_string(),
                    foods: vec![
                        "Oatmeal with fruit".to_string(),
                        "Plain yogurt".to_string(),
                        "Black coffee".to_string(),
                    ],
                    calories: 350,
                },
                Meal {
                    meal_type: "Lunch".to_string(),
                    foods: vec![
                        "Grilled chicken breast".to_string(),
                        "Brown rice".to_string(),
                        "Green salad".to_string(),
                    ],
                    calories: 450,
                },
                Meal {
                    meal_type: "Dinner".to_string(),
                    foods: vec![
                        "Baked salmon".to_string(),
                        "Quinoa".to_string(),
                        "Broccoli".to_string(),
                    ],
                    calories: 400,
                },
                Meal {
                    meal_type: "Snacks".to_string(),
                    foods: vec![
                        "Apple".to_string(),
                        "Walnuts".to_string(),
                        "Yogurt".to_string(),
                    ],
                    calories: 200,
                },
            ],
            shopping_list: vec![
                "Oats".to_string(),
                "Fresh fruit".to_string(),
                "Plain yogurt".to_string(),
                "Chicken breast".to_string(),
                "Brown rice".to_string(),
                "Salmon".to_string(),
                "Quinoa".to_string(),
            ],
            created_at: SEED_CREATED_AT.to_string(),
        },
        NutritionPlan {
            id: "2".to_string(),
            name: "Muscle Gain Plan".to_string(),
            description: "High in protein for building muscle".to_string(),
            meals: vec![
                Meal {
                    meal_type: "Breakfast".to_string(),
                    foods: vec![
                        "Scrambled eggs".to_string(),
                        "Whole-grain bread".to_string(),
                        "Avocado".to_string(),
                    ],
                    calories: 500,
                },
                Meal {
                    meal_type: "Lunch".to_string(),
                    foods: vec![
                        "Red meat".to_string(),
                        "Sweet potato".to_string(),
                        "Vegetables".to_string(),
                    ],
                    calories: 650,
                },
                Meal {
                    meal_type: "Dinner".to_string(),
                    foods: vec![
                        "Tuna".to_string(),
                        "Whole-grain pasta".to_string(),
                        "Spinach".to_string(),
                    ],
                    calories: 550,
                },
                Meal {
                    meal_type: "Snacks".to_string(),
                    foods: vec![
                        "Whey protein".to_string(),
                        "Banana".to_string(),
                        "Almonds".to_string(),
                    ],
                    calories: 300,
                },
            ],
            shopping_list: vec![
                "Eggs".to_string(),
                "Whole-grain bread".to_string(),
                "Avocado".to_string(),
                "Red meat".to_string(),
                "Sweet potato".to_string(),
                "Tuna".to_string(),
                "Whey protein".to_string(),
            ],
            created_at: SEED_CREATED_AT.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_plans_are_well_formed() {
        let plans = workout_plans();
        assert_eq!(plans.len(), 2);
        for plan in &plans {
            assert!(!plan.exercises.is_empty());
            assert!(plan.duration_minutes > 0);
            for exercise in &plan.exercises {
                assert!(exercise.sets > 0);
                assert!(exercise.reps > 0);
            }
        }
    }

    #[test]
    fn test_nutrition_plans_are_well_formed() {
        let plans = nutrition_plans();
        assert_eq!(plans.len(), 2);
        for plan in &plans {
            assert_eq!(plan.meals.len(), 4);
            assert!(!plan.shopping_list.is_empty());
            assert!(plan.meals.iter().all(|meal| !meal.foods.is_empty()));
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let plans = workout_plans();
        let mut exercise_ids: Vec<&str> = plans
            .iter()
            .flat_map(|plan| plan.exercises.iter().map(|e| e.id.as_str()))
            .collect();
        exercise_ids.sort_unstable();
        exercise_ids.dedup();
        assert_eq!(exercise_ids.len(), 6);
    }
}
