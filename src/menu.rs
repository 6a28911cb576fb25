//! Interactive text menu
//!
//! The outer surface of the catalog: six actions, each mapping 1:1 onto a
//! [`CatalogService`](crate::services::catalog::CatalogService) operation.
//! Domain outcomes render as informational messages; storage failures abort
//! the current action but never the loop.

use std::io::{self, BufRead, Write};

use crate::models::NewBook;
use crate::services::catalog::{RemoveOutcome, StatusOutcome};
use crate::services::Services;

/// Run the menu loop until the user exits or input ends.
pub fn run(services: &mut Services) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("Choose an action:");
        println!("1. Add a book");
        println!("2. Remove a book");
        println!("3. Search for books");
        println!("4. List all books");
        println!("5. Change a book's status");
        println!("6. Exit");

        let Some(choice) = prompt(&mut input, "Enter the action number: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_book(services, &mut input)?,
            "2" => remove_book(services, &mut input)?,
            "3" => search_books(services, &mut input)?,
            "4" => list_books(services),
            "5" => change_status(services, &mut input)?,
            "6" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Invalid choice, try again."),
        }
    }

    Ok(())
}

fn add_book(services: &mut Services, input: &mut impl BufRead) -> io::Result<()> {
    let Some(title) = prompt(input, "Enter the title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(input, "Enter the author: ")? else {
        return Ok(());
    };
    let Some(year) = prompt_number(input, "Enter the publication year: ")? else {
        return Ok(());
    };

    match services.catalog.add(NewBook { title, author, year }) {
        Ok(book) => println!("Book '{}' added to the catalog.", book.title),
        Err(e) => {
            tracing::error!("Add failed: {e}");
            println!("Could not add the book: {e}");
        }
    }
    Ok(())
}

fn remove_book(services: &mut Services, input: &mut impl BufRead) -> io::Result<()> {
    let Some(id) = prompt_number(input, "Enter the ID of the book to remove: ")? else {
        return Ok(());
    };

    match services.catalog.remove(id) {
        Ok(RemoveOutcome::Removed(book)) => println!("Book with ID {} removed.", book.id),
        Ok(RemoveOutcome::NotFound) => println!("No book with ID {id} was found."),
        Err(e) => {
            tracing::error!("Remove failed: {e}");
            println!("Could not remove the book: {e}");
        }
    }
    Ok(())
}

fn search_books(services: &Services, input: &mut impl BufRead) -> io::Result<()> {
    let Some(query) = prompt(input, "Enter a title, author or year to search for: ")? else {
        return Ok(());
    };

    let results = services.catalog.search(&query);
    if results.is_empty() {
        println!("No books found.");
    } else {
        println!("Matching books:");
        for book in results {
            println!("{book}");
        }
    }
    Ok(())
}

fn list_books(services: &Services) {
    let books = services.catalog.list_all();
    if books.is_empty() {
        println!("The catalog is empty.");
        return;
    }
    println!("Books in the catalog:");
    for book in books {
        println!("{book}");
    }
}

fn change_status(services: &mut Services, input: &mut impl BufRead) -> io::Result<()> {
    let Some(id) = prompt_number(input, "Enter the ID of the book to update: ")? else {
        return Ok(());
    };
    let Some(status) = prompt(input, "Enter the new status ('available' or 'checked out'): ")?
    else {
        return Ok(());
    };

    match services.catalog.change_status(id, &status) {
        Ok(StatusOutcome::Updated(book)) => {
            println!("Status of book with ID {} changed to '{}'.", book.id, book.status);
        }
        Ok(StatusOutcome::InvalidStatus) => {
            println!("Invalid status. Use 'available' or 'checked out'.");
        }
        Ok(StatusOutcome::NotFound) => println!("No book with ID {id} was found."),
        Err(e) => {
            tracing::error!("Status change failed: {e}");
            println!("Could not change the status: {e}");
        }
    }
    Ok(())
}

/// Print `label` and read one trimmed line. `None` means end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`prompt`], but re-prompts until the line parses as a number.
fn prompt_number<T: std::str::FromStr>(
    input: &mut impl BufRead,
    label: &str,
) -> io::Result<Option<T>> {
    loop {
        let Some(text) = prompt(input, label)? else {
            return Ok(None);
        };
        match text.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}
