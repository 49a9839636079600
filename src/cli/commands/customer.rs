//! Customer CRUD commands.

use anyhow::{anyhow, Result};
use clap::Args;
use comfy_table::{presets, Cell, ContentArrangement, Table};
use console::style;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, Customer, CustomerFilter};
use crate::domain::ports::{CustomerRepository, UpdateOutcome};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by country
    #[arg(short = 'c', long)]
    pub country: Option<String>,
    /// Filter by city
    #[arg(long)]
    pub city: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Customer id (case-insensitive)
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Customer id (stored uppercase)
    pub id: String,
    /// Company name
    #[arg(long)]
    pub company: String,
    /// Contact person
    #[arg(long)]
    pub contact: Option<String>,
    /// Contact title
    #[arg(long)]
    pub title: Option<String>,
    /// Street address
    #[arg(long)]
    pub address: Option<String>,
    /// City
    #[arg(long)]
    pub city: Option<String>,
    /// Region or state
    #[arg(long)]
    pub region: Option<String>,
    /// Postal code
    #[arg(long)]
    pub postal_code: Option<String>,
    /// Country
    #[arg(long)]
    pub country: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Fax number
    #[arg(long)]
    pub fax: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Customer id (case-insensitive)
    pub id: String,
    /// Company name
    #[arg(long)]
    pub company: Option<String>,
    /// Contact person
    #[arg(long)]
    pub contact: Option<String>,
    /// Contact title
    #[arg(long)]
    pub title: Option<String>,
    /// Street address
    #[arg(long)]
    pub address: Option<String>,
    /// City
    #[arg(long)]
    pub city: Option<String>,
    /// Region or state
    #[arg(long)]
    pub region: Option<String>,
    /// Postal code
    #[arg(long)]
    pub postal_code: Option<String>,
    /// Country
    #[arg(long)]
    pub country: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Fax number
    #[arg(long)]
    pub fax: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Customer id (case-insensitive)
    pub id: String,
}

#[derive(Debug, serde::Serialize)]
pub struct CustomerOutput {
    pub id: String,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

impl From<&Customer> for CustomerOutput {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.clone(),
            company_name: c.company_name.clone(),
            contact_name: c.contact_name.clone(),
            city: c.city.clone(),
            country: c.country.clone(),
            phone: c.phone.clone(),
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct CustomerListOutput {
    pub customers: Vec<CustomerOutput>,
    pub total: usize,
}

impl CommandOutput for CustomerListOutput {
    fn to_human(&self) -> String {
        if self.customers.is_empty() {
            return "No customers found.".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(["ID", "COMPANY", "CONTACT", "CITY", "COUNTRY"].map(Cell::new));

        for c in &self.customers {
            table.add_row([
                c.id.as_str(),
                c.company_name.as_str(),
                c.contact_name.as_deref().unwrap_or("-"),
                c.city.as_deref().unwrap_or("-"),
                c.country.as_deref().unwrap_or("-"),
            ]);
        }

        format!("{} customer(s):\n{table}", self.total)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct CustomerDetailOutput {
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CommandOutput for CustomerDetailOutput {
    fn to_human(&self) -> String {
        let c = &self.customer;
        let mut lines = vec![
            format!("{} {}", style("Customer:").bold(), c.id),
            format!("  Company:  {}", c.company_name),
        ];

        let optional = [
            ("Contact", &c.contact_name),
            ("Title", &c.contact_title),
            ("Address", &c.address),
            ("City", &c.city),
            ("Region", &c.region),
            ("Postal", &c.postal_code),
            ("Country", &c.country),
            ("Phone", &c.phone),
            ("Fax", &c.fax),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                lines.push(format!("  {label:<8}  {value}"));
            }
        }
        lines.push(format!("  Updated:  {}", c.updated_at.to_rfc3339()));

        if let Some(note) = &self.note {
            lines.push(format!("  {}", style(note).yellow()));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn list(args: ListArgs, config: &Config, json: bool) -> Result<()> {
    let repo = super::open_repository(config).await?;
    let filter = CustomerFilter {
        country: args.country,
        city: args.city,
    };

    let mut customers = repo.retrieve_all(filter).await?;
    customers.sort_by(|a, b| a.id.cmp(&b.id));

    let result = CustomerListOutput {
        total: customers.len(),
        customers: customers.iter().map(CustomerOutput::from).collect(),
    };
    output(&result, json);
    Ok(())
}

pub async fn show(args: ShowArgs, config: &Config, json: bool) -> Result<()> {
    let repo = super::open_repository(config).await?;

    let customer = repo
        .retrieve(&args.id)
        .await?
        .ok_or_else(|| anyhow!("customer not found: {}", args.id))?;

    output(
        &CustomerDetailOutput {
            customer,
            note: None,
        },
        json,
    );
    Ok(())
}

pub async fn create(args: CreateArgs, config: &Config, json: bool) -> Result<()> {
    let repo = super::open_repository(config).await?;

    let mut customer = Customer::new(args.id, args.company);
    customer.contact_name = args.contact;
    customer.contact_title = args.title;
    customer.address = args.address;
    customer.city = args.city;
    customer.region = args.region;
    customer.postal_code = args.postal_code;
    customer.country = args.country;
    customer.phone = args.phone;
    customer.fax = args.fax;

    let created = repo.create(customer).await?;
    output(
        &CustomerDetailOutput {
            customer: created,
            note: None,
        },
        json,
    );
    Ok(())
}

pub async fn update(args: UpdateArgs, config: &Config, json: bool) -> Result<()> {
    let repo = super::open_repository(config).await?;

    let mut customer = repo
        .retrieve(&args.id)
        .await?
        .ok_or_else(|| anyhow!("customer not found: {}", args.id))?;

    if let Some(company) = args.company {
        customer.company_name = company;
    }
    apply_optional(&mut customer.contact_name, args.contact);
    apply_optional(&mut customer.contact_title, args.title);
    apply_optional(&mut customer.address, args.address);
    apply_optional(&mut customer.city, args.city);
    apply_optional(&mut customer.region, args.region);
    apply_optional(&mut customer.postal_code, args.postal_code);
    apply_optional(&mut customer.country, args.country);
    apply_optional(&mut customer.phone, args.phone);
    apply_optional(&mut customer.fax, args.fax);
    customer.touch();

    let outcome = repo.update(&args.id, customer).await?;
    let note = match &outcome {
        UpdateOutcome::Applied(_) => None,
        UpdateOutcome::CacheStale(_) => {
            Some("committed; cached copy may briefly show an older value".to_string())
        }
    };

    output(
        &CustomerDetailOutput {
            customer: outcome.into_customer(),
            note,
        },
        json,
    );
    Ok(())
}

pub async fn delete(args: DeleteArgs, config: &Config, json: bool) -> Result<()> {
    let repo = super::open_repository(config).await?;

    repo.delete(&args.id).await?;

    if json {
        println!("{}", serde_json::json!({ "deleted": args.id.to_uppercase() }));
    } else {
        println!("Deleted {}", args.id.to_uppercase());
    }
    Ok(())
}

fn apply_optional(field: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *field = value;
    }
}
