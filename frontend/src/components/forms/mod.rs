pub mod calorie_entry_form;
