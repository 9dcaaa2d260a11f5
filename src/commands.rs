//! One handler per CLI action. Handlers validate locally before any
//! request is issued; backend failures surface as printable errors and
//! never poison the session state.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::cli::{
    AnalysisArgs, DecodeFrameArgs, FeedbackListArgs, FeedbackSendArgs, LoginArgs, PredictArgs,
    ReadingArgs, SignupArgs,
};
use crate::device::{decode_frame, validate_channels};
use crate::reading::ReadingForm;
use crate::render::{build_report, format_report};
use crate::schema::FeedbackRequest;
use crate::session::Session;

pub fn signup(session: &Session, args: &SignupArgs) -> Result<()> {
    if args.email.trim().is_empty() || args.password.is_empty() {
        bail!("email and password are required");
    }
    if args.password != args.confirm {
        bail!("passwords do not match");
    }
    let client = ApiClient::new(session);
    client.signup(args.email.trim(), &args.password)?;
    println!("Signup successful. Please login.");
    Ok(())
}

pub fn login(session: &mut Session, args: &LoginArgs) -> Result<()> {
    let email = args.email.trim().to_string();
    let client = ApiClient::new(session);
    let tokens = client.login(&email, &args.password)?;
    session.log_in(tokens.access_token, email.clone());
    session.save()?;
    info!(%email, "token stored");
    println!("Logged in as {email}");
    Ok(())
}

pub fn logout(session: &mut Session) -> Result<()> {
    session.log_out();
    session.save()?;
    println!("Logged out");
    Ok(())
}

pub fn me(session: &Session) -> Result<()> {
    let profile = ApiClient::new(session).me()?;
    println!("User ID:     {}", display_value(&profile.id));
    println!("Email:       {}", profile.email);
    println!("Phone:       {}", profile.phone.as_deref().unwrap_or("-"));
    match profile.age {
        Some(age) => println!("Age:         {age}"),
        None => println!("Age:         -"),
    }
    match profile.height_cm {
        Some(h) => println!("Height (cm): {h}"),
        None => println!("Height (cm): -"),
    }
    println!(
        "Blood group: {}",
        profile.blood_group.as_deref().unwrap_or("-")
    );
    Ok(())
}

pub fn add_reading(session: &Session, args: &ReadingArgs) -> Result<()> {
    let email = owner_email(args.email.as_deref(), session)?;
    let reading = form_from_args(args).to_reading(&email);
    let response = ApiClient::new(session).add_reading(&reading)?;
    println!("Reading added");
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub fn analysis(session: &Session, args: &AnalysisArgs) -> Result<()> {
    let email = owner_email(args.email.as_deref(), session)?;
    let result = ApiClient::new(session).analysis(&email)?;
    print!("{}", format_report(&build_report(&result)));
    Ok(())
}

pub fn predict(session: &Session, args: &PredictArgs) -> Result<()> {
    let request = form_from_args(&args.reading).to_predict_request(args.image_base64.clone());
    let result = ApiClient::new(session).predict(&request)?;
    print!("{}", format_report(&build_report(&result)));
    Ok(())
}

pub fn decode_device_frame(args: &DecodeFrameArgs) -> Result<()> {
    let buf = std::fs::read(&args.input)
        .with_context(|| format!("failed to read frame {}", args.input.display()))?;
    let channels = decode_frame(&buf)?;
    let validated = validate_channels(&channels);
    if !validated.has_valid_data {
        println!("No valid readings found in device frame");
        return Ok(());
    }
    println!("Validated channels ({}):", validated.values.len());
    for (name, value) in &validated.values {
        println!("  {name} = {value:.2}");
    }
    if args.fill {
        let mut form = ReadingForm::default();
        let mut filled = 0;
        for (name, value) in &validated.values {
            if form.set_channel(name, *value) {
                filled += 1;
            }
        }
        println!("Auto-filled {filled} reading fields from device frame");
        let reading = form.to_reading("");
        println!("{}", serde_json::to_string_pretty(&reading)?);
    }
    Ok(())
}

pub fn feedback_send(session: &Session, args: &FeedbackSendArgs) -> Result<()> {
    if !(1..=5).contains(&args.rating) {
        bail!("rating must be between 1 and 5");
    }
    let feedback = FeedbackRequest {
        rating: args.rating,
        comment: args.comment.clone(),
        context_type: args.context.clone(),
        user_email: session.email.clone(),
    };
    ApiClient::new(session).send_feedback(&feedback)?;
    println!("Thanks for your feedback!");
    Ok(())
}

pub fn feedback_list(session: &Session, args: &FeedbackListArgs) -> Result<()> {
    let entries = ApiClient::new(session).public_feedback(args.limit)?;
    if entries.is_empty() {
        println!("No feedback yet");
        return Ok(());
    }
    for entry in entries {
        let rating = entry.rating.min(5) as usize;
        let stars: String = "★".repeat(rating) + &"☆".repeat(5 - rating);
        let comment: String = entry.comment.chars().take(240).collect();
        let who = entry.user_email.as_deref().unwrap_or("Anonymous");
        println!("{stars}  {comment}  — {who}");
    }
    Ok(())
}

pub fn gas_latest(session: &Session) -> Result<()> {
    let snapshot = ApiClient::new(session).gas_latest()?;
    if let Some(error) = &snapshot.error {
        warn!(%error, "gas sensor backend reported an error");
        println!("{}", snapshot.message.as_deref().unwrap_or(error));
        return Ok(());
    }
    let num = |v: &Option<f64>| v.map(|n| format!("{n:.2}")).unwrap_or_else(|| "--".into());
    println!(
        "AQI: {} ({})",
        snapshot.aqi.map(|a| a.to_string()).unwrap_or_else(|| "--".into()),
        snapshot.category.as_deref().unwrap_or("--")
    );
    println!("CO2: {} ppm   CO: {} ppm", num(&snapshot.co2_ppm), num(&snapshot.co_ppm));
    println!("NO2: {} ppb   O3: {} ppb", num(&snapshot.no2_ppb), num(&snapshot.o3_ppb));
    println!(
        "PM2.5: {} ug/m3   PM10: {} ug/m3",
        num(&snapshot.pm25_ugm3),
        num(&snapshot.pm10_ugm3)
    );
    println!(
        "Temperature: {} C   Humidity: {} %",
        num(&snapshot.temperature_c),
        num(&snapshot.humidity_pct)
    );
    if snapshot.color_category.is_some() || snapshot.color_hue.is_some() {
        println!(
            "Color: {} (R {} G {} B {}, hue {})",
            snapshot.color_category.as_deref().unwrap_or("--"),
            num(&snapshot.color_red),
            num(&snapshot.color_green),
            num(&snapshot.color_blue),
            num(&snapshot.color_hue)
        );
    }
    if let Some(ts) = &snapshot.timestamp {
        println!("Last updated: {ts}");
    }
    println!(
        "Health concern: {}",
        snapshot.health_concern.as_deref().unwrap_or("No data available")
    );
    Ok(())
}

pub fn gas_log(session: &Session) -> Result<()> {
    let email = owner_email(None, session)?;
    let client = ApiClient::new(session);
    let snapshot = client.gas_latest()?;
    if let Some(error) = &snapshot.error {
        bail!(
            "gas sensor not available: {}",
            snapshot.message.as_deref().unwrap_or(error)
        );
    }
    client.gas_add_reading(&email)?;
    println!("Gas sensor reading added for {email}");
    Ok(())
}

fn form_from_args(args: &ReadingArgs) -> ReadingForm {
    ReadingForm {
        flow_ml: args.flow_ml.clone(),
        hb: args.hb.clone(),
        ph: args.ph.clone(),
        crp: args.crp.clone(),
        hba1c_ratio: args.hba1c.clone(),
        clots_score: args.clots.clone(),
        fsh_level: args.fsh.clone(),
        lh_level: args.lh.clone(),
        amh_level: args.amh.clone(),
        tsh_level: args.tsh.clone(),
        prolactin_level: args.prolactin.clone(),
        cycle_id: args.cycle_id.clone(),
    }
}

fn owner_email(explicit: Option<&str>, session: &Session) -> Result<String> {
    if let Some(email) = explicit {
        let trimmed = email.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
    session
        .email
        .clone()
        .context("no email given and none stored in the session")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
