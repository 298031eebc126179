// src/common/numeric.rs
//
// Normalização numérica dos resultados do banco.
//
// O driver devolve NUMERIC como `rust_decimal::Decimal` e agregados de 64 bits
// como `i64`. Antes de serializar uma resposta de relatório, convertemos tudo
// para valores seguros em JSON com uma política única:
//
//   - Decimal -> f64 (conversão explícita para double IEEE-754);
//   - inteiro de 64 bits -> número JSON quando |v| <= 2^53 - 1,
//     string decimal acima disso (evita perda silenciosa de precisão
//     no lado do consumidor).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

// Maior inteiro representável sem perda em um double (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Converte um NUMERIC arbitrário para double.
/// A perda de precisão aqui é a inerente ao IEEE-754, nada além.
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Percorre recursivamente uma árvore de valores (escalares, arrays e objetos
/// de profundidade arbitrária) aplicando a política de inteiros acima.
/// Não modifica a entrada; `null` e os demais escalares passam intactos.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Number(n) => normalize_number(n),
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(fields) => {
            let mut out = Map::with_capacity(fields.len());
            for (key, val) in fields {
                out.insert(key.clone(), normalize(val));
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

fn normalize_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        // Comparação sem abs(): abs() estoura em i64::MIN.
        if i > MAX_SAFE_INTEGER || i < -MAX_SAFE_INTEGER {
            return Value::String(i.to_string());
        }
        return Value::Number(n.clone());
    }
    if let Some(u) = n.as_u64() {
        if u > MAX_SAFE_INTEGER as u64 {
            return Value::String(u.to_string());
        }
    }
    // f64 (inclusive os Decimal já serializados como float) passa direto.
    Value::Number(n.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inteiro_dentro_da_faixa_segura_permanece_numero() {
        let input = json!({ "count": MAX_SAFE_INTEGER });
        assert_eq!(normalize(&input), json!({ "count": MAX_SAFE_INTEGER }));
    }

    #[test]
    fn inteiro_acima_da_faixa_segura_vira_string() {
        let big = MAX_SAFE_INTEGER + 1;
        let input = json!({ "count": big });
        assert_eq!(normalize(&input), json!({ "count": big.to_string() }));
    }

    #[test]
    fn inteiro_negativo_fora_da_faixa_vira_string() {
        let big = -(MAX_SAFE_INTEGER + 1);
        let input = json!([big]);
        assert_eq!(normalize(&input), json!([big.to_string()]));
    }

    #[test]
    fn u64_acima_de_i64_vira_string() {
        let input = json!({ "count": u64::MAX });
        assert_eq!(normalize(&input), json!({ "count": u64::MAX.to_string() }));
    }

    #[test]
    fn null_e_escalares_passam_intactos() {
        let input = json!({
            "name": "Trek 820",
            "rate": 1.25,
            "missing": null,
            "flag": true,
        });
        assert_eq!(normalize(&input), input);
    }

    #[test]
    fn arvore_aninhada_e_normalizada_sem_mutacao() {
        let big = MAX_SAFE_INTEGER + 10;
        let input = json!({
            "data": [
                { "nested": { "total": big, "items": [1, 2, big] } },
                null,
            ]
        });
        let snapshot = input.clone();
        let output = normalize(&input);
        assert_eq!(input, snapshot);
        assert_eq!(
            output,
            json!({
                "data": [
                    { "nested": { "total": big.to_string(), "items": [1, 2, big.to_string()] } },
                    null,
                ]
            })
        );
    }

    #[test]
    fn decimal_converte_para_double() {
        let d = Decimal::new(75_000, 2); // 750.00
        assert_eq!(decimal_to_f64(d), 750.0);
    }
}
