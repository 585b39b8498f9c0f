//! Derive macro implementation used by `qunit-core`.
//!
//! `qunit-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of `crate::Unit`,
//! `crate::Ratio`, `crate::Scalar` and `crate::Quantity`, so it is intended to be used by `qunit-core` (or by crates
//! that expose an identical crate-root API).
//!
//! Most users should depend on `qunit` instead and use the predefined units.
//!
//! # Generated items
//!
//! For a unit marker type `MyUnit`, the derive generates:
//!
//! - `impl crate::Unit for MyUnit` (ratio, dimension, symbol, names);
//! - a literal trait `MyUnitLiteral`, implemented for every `crate::Scalar`, with one method named after the literal
//!   suffix (`2.0_f64.hr()`);
//! - with `metric_prefixes`, one marker type, quantity alias, one-unit constant and literal trait per SI prefix from
//!   atto to exa.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed and parsed unit symbol (required)
//! - `name = "meter"`, `plural = "meters"`: human-readable names (default: lowercase type name, plus `s`)
//! - `dimension = SomeDim`: dimension marker type
//! - `of = BaseUnit`: define the ratio relative to another unit, whose dimension is inherited
//! - `ratio = 60`: conversion ratio to the canonical unit of the dimension (or to `of`). Integer literals and
//!   `a / b` fractions of integer literals are exact; float literals go through `Ratio::approximate`; any other
//!   expression must evaluate to a `Ratio` in a const context.
//! - `literal = "inch"`: literal suffix, when the symbol is not a valid method name (default: the symbol)
//! - `plural_tag`: append `s` to the literal suffix (`min` becomes `mins`)
//! - `metric_prefixes`: generate the SI-prefixed family
//!
//! At least one of `dimension` and `of` is required. When both are given, the expansion checks at compile time that
//! they agree.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, BinOp, DeriveInput, Expr, ExprBinary, ExprLit, Ident, Lit, LitStr, Token, Type,
};

/// Derive `crate::Unit` and the literal constructor trait for a unit marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing at least `symbol`, `ratio`, and one of
/// `dimension` or `of`.
///
/// This macro is intended for use by `qunit-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// SI prefixes: type-name prefix, symbol prefix, literal prefix, power of ten.
const PREFIXES: &[(&str, &str, &str, i32)] = &[
    ("Atto", "a", "a", -18),
    ("Femto", "f", "f", -15),
    ("Pico", "p", "p", -12),
    ("Nano", "n", "n", -9),
    ("Micro", "µ", "u", -6),
    ("Milli", "m", "m", -3),
    ("Centi", "c", "c", -2),
    ("Deci", "d", "d", -1),
    ("Deca", "da", "da", 1),
    ("Hecto", "h", "h", 2),
    ("Kilo", "k", "k", 3),
    ("Mega", "M", "M", 6),
    ("Giga", "G", "G", 9),
    ("Tera", "T", "T", 12),
    ("Peta", "P", "P", 15),
    ("Exa", "E", "E", 18),
];

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&input.generics, "unit marker types cannot be generic"));
    }

    let name = &input.ident;
    let vis = &input.vis;
    let attr = parse_unit_attribute(&input.attrs)?;

    let symbol = attr.symbol.value();
    let singular = attr.name.as_ref().map_or_else(|| name.to_string().to_lowercase(), LitStr::value);
    let plural = attr.plural.as_ref().map_or_else(|| format!("{singular}s"), LitStr::value);

    let ratio = lower_ratio(&attr.ratio)?;
    let (ratio, dim) = match (&attr.dimension, &attr.of) {
        (_, Some(base)) => (
            quote! { #ratio.mul(<#base as crate::Unit>::RATIO) },
            quote! { <#base as crate::Unit>::Dim },
        ),
        (Some(dimension), None) => (ratio, quote! { #dimension }),
        (None, None) => {
            return Err(syn::Error::new(Span::call_site(), "missing required attribute `dimension` (or `of`)"));
        }
    };

    let dimension_check = match (&attr.dimension, &attr.of) {
        (Some(dimension), Some(base)) => quote! {
            const _: () = {
                fn assert_dimension<U: crate::Unit<Dim = #dimension>>() {}
                #[allow(dead_code)]
                fn check() {
                    assert_dimension::<#base>();
                }
            };
        },
        _ => TokenStream2::new(),
    };

    let literal_span = attr.literal.as_ref().map_or(attr.symbol.span(), LitStr::span);
    let literal = attr.literal.as_ref().map_or_else(|| symbol.clone(), LitStr::value);
    let literal = if attr.plural_tag { format!("{literal}s") } else { literal };
    let literal_trait = literal_trait(vis, name, &literal, literal_span)?;

    let prefixes = if attr.metric_prefixes {
        metric_prefixes(vis, name, &symbol, &literal, literal_span, &singular, &plural)?
    } else {
        TokenStream2::new()
    };

    Ok(quote! {
        impl crate::Unit for #name {
            const RATIO: crate::Ratio = #ratio;
            type Dim = #dim;
            const SYMBOL: &'static str = #symbol;
            const NAME: &'static str = #singular;
            const PLURAL: &'static str = #plural;
        }

        #dimension_check
        #literal_trait
        #prefixes
    })
}

/// Turns the `ratio` expression into a `crate::Ratio` constant expression.
fn lower_ratio(expr: &Expr) -> syn::Result<TokenStream2> {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(int), .. }) => {
            let value = nonzero_int(int)?;
            Ok(quote! { crate::Ratio::integer(#value) })
        }
        Expr::Lit(ExprLit { lit: Lit::Float(float), .. }) => {
            let value: f64 = float.base10_parse()?;
            if value == 0.0 || !value.is_finite() {
                return Err(syn::Error::new(float.span(), "conversion ratio must be finite and non-zero"));
            }
            Ok(quote! { crate::Ratio::approximate(#value) })
        }
        Expr::Binary(ExprBinary { left, op: BinOp::Div(_), right, .. }) => match (&**left, &**right) {
            (
                Expr::Lit(ExprLit { lit: Lit::Int(num), .. }),
                Expr::Lit(ExprLit { lit: Lit::Int(den), .. }),
            ) => {
                let num = nonzero_int(num)?;
                let den = nonzero_int(den)?;
                Ok(quote! { crate::Ratio::new(#num, #den) })
            }
            _ => Ok(quote! { (#expr) }),
        },
        other => Ok(quote! { (#other) }),
    }
}

fn nonzero_int(int: &syn::LitInt) -> syn::Result<proc_macro2::Literal> {
    let value: i128 = int.base10_parse()?;
    if value == 0 {
        return Err(syn::Error::new(int.span(), "conversion ratio terms must be non-zero"));
    }
    Ok(proc_macro2::Literal::i128_unsuffixed(value))
}

/// Builds the literal method identifier, falling back to a raw identifier for keywords.
fn literal_ident(literal: &str, span: Span) -> syn::Result<Ident> {
    if syn::parse_str::<Ident>(literal).is_ok() {
        return Ok(Ident::new(literal, span));
    }
    match syn::parse_str::<Ident>(&format!("r#{literal}")) {
        Ok(_) => Ok(Ident::new_raw(literal, span)),
        Err(_) => Err(syn::Error::new(
            span,
            format!("`{literal}` is not a valid literal suffix, set `literal = \"...\"`"),
        )),
    }
}

fn literal_trait(vis: &syn::Visibility, unit: &Ident, literal: &str, span: Span) -> syn::Result<TokenStream2> {
    let trait_name = format_ident!("{}Literal", unit);
    let method = literal_ident(literal, span)?;
    let trait_doc = format!("Literal constructor for [`{unit}`] quantities: `x.{literal}()`.");
    let method_doc = format!("Interprets `self` as a value in [`{unit}`].");

    Ok(quote! {
        #[doc = #trait_doc]
        #[allow(non_snake_case)]
        #vis trait #trait_name: crate::Scalar {
            #[doc = #method_doc]
            fn #method(self) -> crate::Quantity<#unit, Self>;
        }

        #[allow(non_snake_case)]
        impl<T: crate::Scalar> #trait_name for T {
            #[inline]
            fn #method(self) -> crate::Quantity<#unit, T> {
                crate::Quantity::new(self)
            }
        }
    })
}

fn metric_prefixes(
    vis: &syn::Visibility,
    base: &Ident,
    symbol: &str,
    literal: &str,
    span: Span,
    singular: &str,
    plural: &str,
) -> syn::Result<TokenStream2> {
    let base_lower = base.to_string().to_lowercase();
    let mut out = TokenStream2::new();

    for &(prefix, prefix_symbol, prefix_literal, exp) in PREFIXES {
        let unit = format_ident!("{}{}", prefix, base_lower, span = base.span());
        let alias = format_ident!("{}s", unit);
        let constant = format_ident!("{}", unit.to_string().to_uppercase());

        let lower = prefix.to_lowercase();
        let unit_singular = format!("{lower}{singular}");
        let unit_plural = format!("{lower}{plural}");
        let unit_symbol = format!("{prefix_symbol}{symbol}");

        let unit_doc = format!("Unit of {unit_plural} (`1 {unit_symbol} = 10^{exp} {symbol}`).");
        let alias_doc = format!("A quantity measured in {unit_plural}.");
        let const_doc = format!("A constant representing one {unit_singular}.");

        let literal_trait = literal_trait(vis, &unit, &format!("{prefix_literal}{literal}"), span)?;

        out.extend(quote! {
            #[doc = #unit_doc]
            #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
            #vis struct #unit;

            impl crate::Unit for #unit {
                const RATIO: crate::Ratio = crate::Ratio::pow10(#exp).mul(<#base as crate::Unit>::RATIO);
                type Dim = <#base as crate::Unit>::Dim;
                const SYMBOL: &'static str = #unit_symbol;
                const NAME: &'static str = #unit_singular;
                const PLURAL: &'static str = #unit_plural;
            }

            #[doc = #alias_doc]
            #vis type #alias<T = f64> = crate::Quantity<#unit, T>;

            #[doc = #const_doc]
            #vis const #constant: #alias = #alias::new(1.0);

            #literal_trait
        });
    }

    Ok(out)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    name: Option<LitStr>,
    plural: Option<LitStr>,
    dimension: Option<Type>,
    of: Option<Type>,
    ratio: Expr,
    literal: Option<LitStr>,
    plural_tag: bool,
    metric_prefixes: bool,
}

fn set_once<T>(slot: &mut Option<T>, key: &Ident, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(key.span(), format!("duplicate attribute `{key}`")));
    }
    *slot = Some(value);
    Ok(())
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol = None;
        let mut name = None;
        let mut plural = None;
        let mut dimension = None;
        let mut of = None;
        let mut ratio = None;
        let mut literal = None;
        let mut plural_tag = None;
        let mut metric_prefixes = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;

            match key.to_string().as_str() {
                "plural_tag" => set_once(&mut plural_tag, &key, ())?,
                "metric_prefixes" => set_once(&mut metric_prefixes, &key, ())?,
                other => {
                    input.parse::<Token![=]>()?;
                    match other {
                        "symbol" => set_once(&mut symbol, &key, input.parse::<LitStr>()?)?,
                        "name" => set_once(&mut name, &key, input.parse::<LitStr>()?)?,
                        "plural" => set_once(&mut plural, &key, input.parse::<LitStr>()?)?,
                        "dimension" => set_once(&mut dimension, &key, input.parse::<Type>()?)?,
                        "of" => set_once(&mut of, &key, input.parse::<Type>()?)?,
                        "ratio" => set_once(&mut ratio, &key, input.parse::<Expr>()?)?,
                        "literal" => set_once(&mut literal, &key, input.parse::<LitStr>()?)?,
                        _ => {
                            return Err(syn::Error::new(key.span(), format!("unknown attribute `{other}`")));
                        }
                    }
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol: LitStr =
            symbol.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let ratio = ratio.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;
        if dimension.is_none() && of.is_none() {
            return Err(syn::Error::new(input.span(), "missing required attribute `dimension` (or `of`)"));
        }
        if symbol.value().chars().any(char::is_whitespace) {
            return Err(syn::Error::new(symbol.span(), "unit symbols cannot contain whitespace"));
        }

        Ok(UnitAttribute {
            symbol,
            name,
            plural,
            dimension,
            of,
            ratio,
            literal,
            plural_tag: plural_tag.is_some(),
            metric_prefixes: metric_prefixes.is_some(),
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(Span::call_site(), "missing #[unit(...)] attribute"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        derive_unit_impl(input).unwrap().to_string()
    }

    fn expand_err(input: DeriveInput) -> String {
        derive_unit_impl(input).err().unwrap().to_string()
    }

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "hr", name = "hour", plural = "hours", of = Minute, ratio = 60)]
            pub struct Hour;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "hr");
        assert_eq!(attr.name.unwrap().value(), "hour");
        assert!(attr.dimension.is_none());
        assert!(attr.of.is_some());
        assert!(!attr.plural_tag);
        assert!(!attr.metric_prefixes);
    }

    #[test]
    fn test_parse_flags() {
        let tokens = quote! {
            symbol = "min", of = Second, ratio = 60, plural_tag, metric_prefixes
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert!(attr.plural_tag);
        assert!(attr.metric_prefixes);
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let tokens = quote! { dimension = Length, ratio = 1 };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_dimension() {
        let tokens = quote! { symbol = "m", ratio = 1 };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_ratio() {
        let tokens = quote! { symbol = "m", dimension = Length };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `ratio`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let tokens = quote! { symbol = "m", dimension = Length, ratio = 1, unknown = "value" };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `unknown`"));
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let tokens = quote! { symbol = "m", symbol = "km", dimension = Length, ratio = 1 };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("duplicate attribute `symbol`"));
    }

    #[test]
    fn test_parse_rejects_non_string_symbol() {
        let tokens = quote! { symbol = m, dimension = Length, ratio = 1 };
        assert!(syn::parse2::<UnitAttribute>(tokens).is_err());
    }

    #[test]
    fn test_parse_rejects_whitespace_in_symbol() {
        let tokens = quote! { symbol = "k m", dimension = Length, ratio = 1 };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "m", dimension = Length, ratio = 1,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let result: syn::Result<UnitAttribute> = syn::parse2(quote! {});
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let code = expand(parse_quote! {
            #[unit(symbol = "s", dimension = Time, ratio = 1)]
            pub struct Second;
        });
        assert!(code.contains("impl crate :: Unit for Second"));
        assert!(code.contains("const RATIO : crate :: Ratio = crate :: Ratio :: integer (1)"));
        assert!(code.contains("const SYMBOL : & 'static str = \"s\""));
        assert!(code.contains("const NAME : & 'static str = \"second\""));
        assert!(code.contains("const PLURAL : & 'static str = \"seconds\""));
        assert!(code.contains("type Dim = Time"));
        assert!(code.contains("pub trait SecondLiteral : crate :: Scalar"));
        assert!(code.contains("fn s (self)"));
    }

    #[test]
    fn test_ratio_lowering() {
        assert_eq!(lower_ratio(&parse_quote!(3_600)).unwrap().to_string(), "crate :: Ratio :: integer (3600)");
        assert_eq!(lower_ratio(&parse_quote!(3048 / 10000)).unwrap().to_string(), "crate :: Ratio :: new (3048 , 10000)");
        assert_eq!(lower_ratio(&parse_quote!(0.5)).unwrap().to_string(), "crate :: Ratio :: approximate (0.5f64)");
        assert_eq!(
            lower_ratio(&parse_quote!(crate::Ratio::approximate(PI))).unwrap().to_string(),
            "(crate :: Ratio :: approximate (PI))"
        );
    }

    #[test]
    fn test_ratio_rejects_zero() {
        let err = lower_ratio(&parse_quote!(1 / 0)).err().unwrap();
        assert!(err.to_string().contains("non-zero"));
        let err = lower_ratio(&parse_quote!(0)).err().unwrap();
        assert!(err.to_string().contains("non-zero"));
        let err = lower_ratio(&parse_quote!(0.0)).err().unwrap();
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn test_derive_relative_to_base() {
        let code = expand(parse_quote! {
            #[unit(symbol = "min", of = Second, ratio = 60, plural_tag)]
            pub struct Minute;
        });
        assert!(code.contains("crate :: Ratio :: integer (60) . mul (< Second as crate :: Unit > :: RATIO)"));
        assert!(code.contains("type Dim = < Second as crate :: Unit > :: Dim"));
        assert!(code.contains("fn mins (self)"));
        assert!(!code.contains("assert_dimension"));
    }

    #[test]
    fn test_derive_checks_dimension_against_base() {
        let code = expand(parse_quote! {
            #[unit(symbol = "d", dimension = Time, of = Hour, ratio = 24)]
            pub struct Day;
        });
        assert!(code.contains("fn assert_dimension < U : crate :: Unit < Dim = Time > > ()"));
        assert!(code.contains("assert_dimension :: < Hour > ()"));
    }

    #[test]
    fn test_custom_literal_and_keyword_literal() {
        let code = expand(parse_quote! {
            #[unit(symbol = "in", of = Foot, ratio = 1 / 12, literal = "inch")]
            pub struct Inch;
        });
        assert!(code.contains("fn inch (self)"));

        let code = expand(parse_quote! {
            #[unit(symbol = "as", dimension = Time, ratio = 1)]
            pub struct Weird;
        });
        assert!(code.contains("fn r#as (self)"));
    }

    #[test]
    fn test_invalid_literal_suffix() {
        let err = expand_err(parse_quote! {
            #[unit(symbol = "m/s", dimension = Speed, ratio = 1)]
            pub struct MeterPerSecond;
        });
        assert!(err.contains("not a valid literal suffix"));
    }

    #[test]
    fn test_metric_prefixes() {
        let code = expand(parse_quote! {
            #[unit(symbol = "s", dimension = Time, ratio = 1, metric_prefixes)]
            pub struct Second;
        });
        for &(prefix, _, _, _) in PREFIXES {
            assert!(code.contains(&format!("pub struct {prefix}second ;")), "missing {prefix}second");
        }
        assert!(code.contains("pub type Kiloseconds < T = f64 > = crate :: Quantity < Kilosecond , T >"));
        assert!(code.contains("pub const KILOSECOND : Kiloseconds = Kiloseconds :: new (1.0)"));
        assert!(code.contains("crate :: Ratio :: pow10 (3i32) . mul (< Second as crate :: Unit > :: RATIO)"));
        assert!(code.contains("const SYMBOL : & 'static str = \"µs\""));
        assert!(code.contains("const NAME : & 'static str = \"millisecond\""));
        assert!(code.contains("fn us (self)"));
        assert!(code.contains("fn ks (self)"));
        assert!(code.contains("fn r#as (self)"));
    }

    #[test]
    fn test_derive_rejects_generics() {
        let err = expand_err(parse_quote! {
            #[unit(symbol = "x", dimension = D, ratio = 1)]
            pub struct Generic<T>(T);
        });
        assert!(err.contains("cannot be generic"));
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
