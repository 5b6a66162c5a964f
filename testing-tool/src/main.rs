use colored::*;
use serde_json::{json, Map, Value};
use std::io::{self, Write};

const FIELDS: [(&str, &str); 11] = [
    ("dieselLiters", "Diésel (L)"),
    ("gasM3", "Gas natural (m³)"),
    ("lpgKg", "LPG (kg)"),
    ("vehicleDistanceKm", "Distancia en vehículo (km)"),
    ("electricityKWh", "Electricidad de red (kWh)"),
    ("solarKWh", "Generación solar (kWh)"),
    ("foodWaste", "Residuos de comida (kg)"),
    ("plasticWaste", "Residuos plásticos (kg)"),
    ("bottleWaste", "Botellas (kg)"),
    ("glassWaste", "Vidrio (kg)"),
    ("cartonWaste", "Cartón (kg)"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("{}", "🌱 Carbon Dashboard Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = prompt("URL del servidor [http://localhost:3000]: ")?;
    let base_url = if base_url.is_empty() {
        "http://localhost:3000".to_string()
    } else {
        base_url.trim_end_matches('/').to_string()
    };
    let client = reqwest::Client::new();

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🧮 Calcular emisiones");
        println!("2. 📄 Calcular y descargar reporte PDF");
        println!("3. 🚪 Salir");

        match prompt("Selecciona una opción (1-3): ")?.as_str() {
            "1" => {
                let payload = read_quantities()?;
                test_calculate(&client, &base_url, &payload).await?;
            }
            "2" => {
                let payload = read_quantities()?;
                if let Some(result) = test_calculate(&client, &base_url, &payload).await? {
                    test_report(&client, &base_url, &result).await?;
                }
            }
            "3" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Pedir las cantidades; el texto se envía tal cual para probar el parseo del servidor
fn read_quantities() -> io::Result<Value> {
    println!();
    println!("{}", "✏️ CANTIDADES (vacío = 0)".bright_cyan().bold());
    println!("{}", "==========================".bright_cyan());

    let mut payload = Map::new();
    for (key, label) in FIELDS {
        let raw = prompt(&format!("{}: ", label))?;
        if !raw.is_empty() {
            payload.insert(key.to_string(), Value::String(raw));
        }
    }

    let vehicle = prompt("Tipo de vehículo [Small Petrol Car]: ")?;
    if !vehicle.is_empty() {
        payload.insert("vehicleType".to_string(), Value::String(vehicle));
    }
    Ok(Value::Object(payload))
}

async fn test_calculate(
    client: &reqwest::Client,
    base_url: &str,
    payload: &Value,
) -> anyhow::Result<Option<Value>> {
    let url = format!("{}/api/calculate", base_url);

    println!();
    println!("{}", "📤 URL:".bright_blue());
    println!("{}", url);
    println!("{}", "📦 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(payload)?);

    let response = client.post(&url).json(payload).send().await?;
    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        println!("{}", format!("❌ HTTP {}: {}", status, body).bright_red());
        return Ok(None);
    }

    println!();
    println!("{}", "📥 RESULTADO (kg CO₂e)".bright_green().bold());
    println!("{}", "======================".bright_green());
    print_scope("Scope 1", &body["scope1"], &["diesel", "naturalGas", "lpg", "vehicles", "total"]);
    print_scope("Scope 2", &body["scope2"], &["electricity", "solarOffset", "net"]);
    print_scope("Scope 3", &body["scope3"], &["waste", "total"]);
    println!(
        "{}",
        format!("TOTAL: {:.2}", body["total"].as_f64().unwrap_or(0.0))
            .bright_white()
            .bold()
    );

    Ok(Some(body))
}

fn print_scope(title: &str, scope: &Value, keys: &[&str]) {
    println!("{}", title.bright_cyan().bold());
    for key in keys {
        println!("   {:<12} {:>14.2}", key, scope[*key].as_f64().unwrap_or(0.0));
    }
}

async fn test_report(
    client: &reqwest::Client,
    base_url: &str,
    result: &Value,
) -> anyhow::Result<()> {
    let month = prompt("Mes del reporte (vacío = mes actual): ")?;
    let mut payload = json!({
        "regionId": "carbon-report",
        "totalEmissions": result["total"],
        "scope1": result["scope1"]["total"],
        "scope2": result["scope2"]["net"],
        "scope3": result["scope3"]["total"],
    });
    if !month.is_empty() {
        payload["month"] = Value::String(month);
    }

    let response = client
        .post(format!("{}/api/report", base_url))
        .json(&payload)
        .send()
        .await?;

    if response.status() == reqwest::StatusCode::NO_CONTENT {
        println!("{}", "⚠️ El servidor abortó la exportación".bright_yellow());
        return Ok(());
    }
    if !response.status().is_success() {
        println!("{}", format!("❌ HTTP {}", response.status()).bright_red());
        return Ok(());
    }

    let filename = response
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split("filename=").nth(1))
        .map(|v| v.trim_matches('"').to_string())
        .unwrap_or_else(|| "Carbon_Report.pdf".to_string());

    let bytes = response.bytes().await?;
    std::fs::write(&filename, &bytes)?;
    println!(
        "{}",
        format!("✅ Reporte guardado como {} ({} bytes)", filename, bytes.len()).bright_green()
    );
    Ok(())
}
