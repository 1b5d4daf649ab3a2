//! Currency and date formatting for pt-BR display.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format an amount as Brazilian reais: `1500.5` becomes `"R$ 1.500,50"`.
///
/// Rounds to the centavo; negative amounts carry a leading minus sign.
pub fn formatar_valor(valor: f64) -> String {
    let sinal = if valor < 0.0 { "-" } else { "" };
    let centavos = (valor.abs() * 100.0).round() as u64;
    let reais = (centavos / 100).to_string();
    let resto = centavos % 100;

    let digitos: Vec<char> = reais.chars().collect();
    let mut inteiro = String::with_capacity(digitos.len() + digitos.len() / 3);
    for (i, c) in digitos.iter().enumerate() {
        if i > 0 && (digitos.len() - i) % 3 == 0 {
            inteiro.push('.');
        }
        inteiro.push(*c);
    }

    format!("{sinal}R$ {inteiro},{resto:02}")
}

/// Format an ISO `YYYY-MM-DD` date (datetime suffixes tolerated) as
/// `DD/MM/YYYY`. Unrecognized input passes through unchanged.
pub fn formatar_data(data: &str) -> String {
    let dia = data.get(..10).unwrap_or(data);
    let partes: Vec<&str> = dia.split('-').collect();
    match partes[..] {
        [ano, mes, dia] if ano.len() == 4 && !mes.is_empty() && !dia.is_empty() => {
            format!("{dia}/{mes}/{ano}")
        }
        _ => data.to_owned(),
    }
}

/// Today's date as `YYYY-MM-DD`; empty off the browser.
pub fn hoje() -> String {
    #[cfg(feature = "csr")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.get(..10).unwrap_or("").to_owned()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
