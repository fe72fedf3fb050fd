use chrono::NaiveDate;
use clap::Subcommand;
use liftoff_core::models::{Employee, Gender, NewEmployee};
use liftoff_core::{report, table, ApiClient, Candidate, Result, UpdatePatch};

#[derive(Subcommand, Debug)]
pub enum EmployeeCommand {
    /// Register a new employee.
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone_number: String,
        /// Contract date, YYYY-MM-DD.
        #[arg(long)]
        hire_date: NaiveDate,
        #[arg(long)]
        department_id: i64,
        #[arg(long)]
        job_title: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        birth_date: NaiveDate,
        #[arg(long, value_enum)]
        gender: Gender,
        #[arg(long)]
        nationality: String,
        #[arg(long)]
        start_date: NaiveDate,
        #[arg(long)]
        salary: f64,
    },
    /// Show every employee.
    List,
    /// Show one employee by id.
    Get { id: i64 },
    /// Overwrite the supplied fields of an employee; omitted flags stay untouched.
    Update {
        id: i64,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
        #[arg(long)]
        department_id: Option<i64>,
        #[arg(long)]
        job_title: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, value_enum)]
        gender: Option<Gender>,
        #[arg(long)]
        nationality: Option<String>,
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        salary: Option<f64>,
        #[arg(long)]
        termination_date: Option<NaiveDate>,
    },
    /// Remove an employee.
    Delete { id: i64 },
}

pub async fn run(cmd: EmployeeCommand, client: &ApiClient) -> Result<()> {
    match cmd {
        EmployeeCommand::Create {
            first_name,
            last_name,
            email,
            phone_number,
            hire_date,
            department_id,
            job_title,
            location,
            birth_date,
            gender,
            nationality,
            start_date,
            salary,
        } => {
            let created: Employee = client
                .create(&NewEmployee {
                    first_name,
                    last_name,
                    email,
                    phone_number,
                    hire_date,
                    department_id,
                    job_title,
                    location,
                    birth_date,
                    gender,
                    nationality,
                    start_date,
                    salary,
                })
                .await?;
            println!("{}", report::SUCCESS);
            print!("{}", table::render(std::slice::from_ref(&created)));
        }
        EmployeeCommand::List => {
            let employees: Vec<Employee> = client.list().await?;
            print!("{}", table::render(&employees));
        }
        EmployeeCommand::Get { id } => {
            let employee: Employee = client.get_one(id).await?;
            print!("{}", table::render(std::slice::from_ref(&employee)));
        }
        EmployeeCommand::Update {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            department_id,
            job_title,
            location,
            gender,
            nationality,
            start_date,
            salary,
            termination_date,
        } => {
            let patch = UpdatePatch::compose([
                ("first_name", Candidate::Text(first_name.unwrap_or_default())),
                ("last_name", Candidate::Text(last_name.unwrap_or_default())),
                ("email", Candidate::Text(email.unwrap_or_default())),
                ("phone_number", Candidate::Text(phone_number.unwrap_or_default())),
                ("department_id", Candidate::Integer(department_id.unwrap_or(0))),
                ("job_title", Candidate::Text(job_title.unwrap_or_default())),
                ("location", Candidate::Text(location.unwrap_or_default())),
                (
                    "gender",
                    Candidate::Choice(gender.map(|g| g.wire_name().to_string())),
                ),
                ("nationality", Candidate::Text(nationality.unwrap_or_default())),
                ("start_date", Candidate::Date(start_date)),
                ("salary", Candidate::Number(salary.unwrap_or(0.0))),
                ("termination_date", Candidate::Date(termination_date)),
            ])?;
            client.update::<Employee>(id, &patch).await?;
            println!("{}", report::SUCCESS);
        }
        EmployeeCommand::Delete { id } => {
            client.delete::<Employee>(id).await?;
            println!("{}", report::SUCCESS);
        }
    }
    Ok(())
}
