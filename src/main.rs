use std::{path::PathBuf, process};

use anyhow::Result;
use clap::{Parser, Subcommand};
use shoptrack::{authenticate, commands, Branch, Lkr, Store};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the CSV data files
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create any missing data files with their header rows
    Init,
    /// Check a username and password against the user records
    Login { username: String, password: String },
    /// Record a new user
    AddUser { username: String, password: String },
    /// Record a new branch
    AddBranch {
        branch_id: String,
        name: String,
        location: String,
    },
    /// Record a new sale
    AddSale {
        branch_id: String,
        product_id: String,
        amount: Lkr,
        /// Sale date (YYYY-MM-DD or MM/DD/YYYY); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the sale amount distribution for one branch
    MonthlySales { branch_id: String },
    /// Show price statistics for one product
    PriceAnalysis { product_id: String },
    /// Show network-wide totals for the current week
    WeeklySales,
    /// Show the grand total over all recorded sales
    TotalSales,
    /// Show monthly sale totals for every known branch
    BranchTotals,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = Store::new(&cli.data_dir);
    match cli.command {
        Command::Init => {
            store.init_all()?;
            println!("Data files ready in {}", cli.data_dir.display());
        }
        Command::Login { username, password } => {
            if authenticate(&store, &username, &password)? {
                println!("Login Successful! Welcome Back User");
            } else {
                println!("Invalid credentials. Please try again.");
                process::exit(1);
            }
        }
        Command::AddUser { username, password } => {
            commands::add_user(&store, &username, &password)?;
            println!("User {username} added successfully.");
        }
        Command::AddBranch {
            branch_id,
            name,
            location,
        } => {
            commands::add_branch(&store, Branch {
                branch_id,
                name: name.clone(),
                location,
            })?;
            println!("Branch {name} added successfully.");
        }
        Command::AddSale {
            branch_id,
            product_id,
            amount,
            date,
        } => {
            commands::add_sale(&store, &branch_id, &product_id, amount, date)?;
            println!("Sale updated successfully.");
        }
        Command::MonthlySales { branch_id } => {
            print!("{}", commands::monthly_sales(&store, &branch_id)?);
        }
        Command::PriceAnalysis { product_id } => {
            print!("{}", commands::price_analysis(&store, &product_id)?);
        }
        Command::WeeklySales => {
            print!("{}", commands::weekly_sales(&store)?);
        }
        Command::TotalSales => {
            print!("{}", commands::total_sales(&store)?);
        }
        Command::BranchTotals => {
            print!("{}", commands::all_branch_totals(&store)?);
        }
    }
    Ok(())
}
