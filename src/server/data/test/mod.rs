mod city;
mod clothing_choice;
mod clothing_item;
mod location;
mod user;
mod user_city;
