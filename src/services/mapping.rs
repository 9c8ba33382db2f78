//! Traducción de entidades del dominio a registros de petición
//!
//! Funciones puras: leen la entidad y construyen el registro, sin validar
//! (las entidades ya se validaron al construirse). Los objetos anidados
//! opcionales solo aparecen cuando la entidad los tiene.

use crate::dto::{
    AddressForServiceIn, AddressForServiceList, AddressIn, ColliIn, ColliList,
    ExternalNumberIn, ExternalNumberList, FlagIn, FlagList, OrderIn, PackageIn,
    PackageServiceIn, PackageServiceList, PackageSetIn, PalletInfoIn, PaymentInfoIn,
    PickupOrderIn, RouteIn, RouteList, SpecDeliveryIn, WeightedPackageInfoIn,
};
use crate::models::{
    Address, AddressForService, Flag, Order, Package, PalletInfo, PaymentInfo, PickupOrder,
    SpecialDelivery, WeightedPackageInfo,
};
use crate::utils::formatting::{format_date, format_date_time, format_time};

pub fn address_in(address: &Address) -> AddressIn {
    AddressIn {
        city: address.city().to_string(),
        contact: address.contact().map(str::to_string),
        country: address.country().to_string(),
        email: address.email().map(str::to_string),
        name: address.name().to_string(),
        name2: address.name2().map(str::to_string),
        phone: address.phone().map(str::to_string),
        street: address.street().to_string(),
        zip_code: address.zip_code().to_string(),
    }
}

/// Lista vacía de flags = campo ausente
pub fn flag_list(flags: &[Flag]) -> Option<FlagList> {
    if flags.is_empty() {
        return None;
    }

    Some(FlagList {
        items: flags
            .iter()
            .map(|flag| FlagIn {
                code: flag.code().to_string(),
                value: flag.value(),
            })
            .collect(),
    })
}

pub fn order_in(order: &Order) -> OrderIn {
    OrderIn {
        count_pack: order.count_packages(),
        cust_ref: order.customer_reference().map(str::to_string),
        email: order.email().map(str::to_string),
        note: order.note().map(str::to_string),
        ord_ref_id: order.order_reference_id().to_string(),
        pack_product_type: order.product().code(),
        send_date: format_date_time(order.send_date()),
        send_time_from: order.send_time().map(|window| format_date_time(window.from())),
        send_time_to: order.send_time().map(|window| format_date_time(window.to())),
        sender: address_in(order.sender()),
        recipient: address_in(order.recipient()),
    }
}

pub fn pickup_order_in(order: &PickupOrder) -> PickupOrderIn {
    PickupOrderIn {
        ord_ref_id: order.order_reference_id().to_string(),
        cust_ref: order.customer_reference().map(str::to_string),
        count_pack: order.count_packages(),
        note: order.note().map(str::to_string),
        email: order.email().map(str::to_string),
        send_date: format_date(order.send_date()),
        send_time_from: order.send_time().map(|window| format_date_time(window.from())),
        send_time_to: order.send_time().map(|window| format_date_time(window.to())),
        sender: address_in(order.sender()),
    }
}

/// Fechas de entrega especial: fecha sola y hora sola
pub fn special_delivery_in(delivery: &SpecialDelivery) -> SpecDeliveryIn {
    SpecDeliveryIn {
        parcel_shop_code: delivery.parcel_shop_code().map(str::to_string),
        spec_deliv_date: delivery.delivery_date().map(format_date),
        spec_deliv_time_from: delivery.delivery_time_from().map(format_time),
        spec_deliv_time_to: delivery.delivery_time_to().map(format_time),
        spec_take_date: delivery.take_date().map(format_date),
        spec_take_time_from: delivery.take_time_from().map(format_time),
        spec_take_time_to: delivery.take_time_to().map(format_time),
    }
}

pub fn payment_info_in(payment: &PaymentInfo) -> PaymentInfoIn {
    let cod = payment.cod();
    let insurance = payment.insurance();

    PaymentInfoIn {
        bank_account: payment.bank_account().map(str::to_string),
        bank_code: payment.bank_code().map(str::to_string),
        cod_currency: cod.map(|cod| cod.currency().to_string()),
        cod_price: cod.map(|cod| cod.price()),
        cod_var_sym: cod.map(|cod| cod.variable_symbol().to_string()),
        iban: payment.iban().map(str::to_string),
        insur_currency: insurance.map(|insurance| insurance.currency().to_string()),
        insur_price: insurance.map(|insurance| insurance.price()),
        spec_symbol: payment.specific_symbol().map(str::to_string),
        swift: payment.swift().map(str::to_string),
    }
}

pub fn pallet_info_in(pallet: &PalletInfo) -> PalletInfoIn {
    PalletInfoIn {
        collies: ColliList {
            items: pallet
                .collies()
                .iter()
                .map(|colli| ColliIn {
                    colli_number: colli.colli_number().to_string(),
                    height: colli.height(),
                    length: colli.length(),
                    weight: colli.weight(),
                    width: colli.width(),
                    wrap_code: colli.wrap_code().map(|wrap| wrap.code()),
                })
                .collect(),
        },
        manipulation_type: pallet.manipulation_type(),
        peur_count: pallet.pallet_eur_count(),
        pack_desc: pallet.pack_description().map(str::to_string),
        pick_up_cargo_type_code: pallet.pickup_cargo_type_code().map(str::to_string),
        volume: pallet.volume(),
    }
}

pub fn weighted_package_info_in(info: &WeightedPackageInfo) -> WeightedPackageInfoIn {
    WeightedPackageInfoIn {
        weight: info.weight(),
        routes: RouteList {
            items: info
                .routes()
                .iter()
                .map(|route| RouteIn {
                    route_type: route.route_type().to_string(),
                    route_code: route.route_code().to_string(),
                })
                .collect(),
        },
    }
}

pub fn address_for_service_in(address: &AddressForService) -> AddressForServiceIn {
    AddressForServiceIn {
        service_address_type: address.service_address_type().to_string(),
        recipient: address_in(address.address()),
        flags: flag_list(address.flags()),
    }
}

pub fn package_in(package: &Package) -> PackageIn {
    PackageIn {
        pack_number: package.package_number().to_string(),
        pack_product_type: package.product().code(),
        note: package.note().map(str::to_string),
        sender: package.sender().map(|sender| address_in(sender)),
        recipient: address_in(package.recipient()),
        spec_delivery: package.special_delivery().map(special_delivery_in),
        payment_info: package.payment_info().map(payment_info_in),
        packages_ext_nums: ExternalNumberList {
            items: package
                .external_numbers()
                .iter()
                .map(|number| ExternalNumberIn {
                    code: number.code().to_string(),
                    ext_number: number.external_number().to_string(),
                })
                .collect(),
        },
        package_services: PackageServiceList {
            items: package
                .package_services()
                .iter()
                .map(|service| PackageServiceIn {
                    svc_code: service.svc_code().to_string(),
                })
                .collect(),
        },
        package_set: package.package_set().map(|set| PackageSetIn {
            master_pack_number: set.master_package_number().to_string(),
            package_in_set_nr: set.package_position(),
            packages_in_set: set.package_count(),
        }),
        flags: flag_list(package.flags()),
        pallet_info: package.pallet_info().map(pallet_info_in),
        weighted_package_info: package.weighted_package_info().map(weighted_package_info_in),
        addresses_for_services: AddressForServiceList {
            items: package
                .addresses_for_services()
                .iter()
                .map(address_for_service_in)
                .collect(),
        },
        depo_code: package.depo_code().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Country, Currency, Product};
    use crate::models::{Recipient, SendTimeWindow, Sender};
    use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn recipient() -> Recipient {
        Recipient::new("Jan Novák", "Krátká 3", "Brno", "60200", Country::CZ).unwrap()
    }

    fn sender() -> Sender {
        Sender::new("Eshop s.r.o.", "Dlouhá 1", "Praha", "11000", Country::CZ).unwrap()
    }

    #[test]
    fn test_minimal_package_omits_optional_groups() {
        let package = Package::new("40950000114", Product::PplParcelCzPrivate, recipient()).unwrap();
        let value = serde_json::to_value(package_in(&package)).unwrap();

        for absent in [
            "SpecDelivery",
            "PaymentInfo",
            "PalletInfo",
            "WeightedPackageInfo",
            "PackageSet",
            "Flags",
            "Sender",
            "Note",
            "DepoCode",
        ] {
            assert!(value.get(absent).is_none(), "{absent} should be absent");
        }
        assert_eq!(value["PackagesExtNums"], json!({ "MyApiPackageExtNum": [] }));
        assert_eq!(value["PackProductType"], json!(13));
        assert_eq!(value["Recipient"]["Country"], json!("CZ"));
    }

    #[test]
    fn test_order_uses_combined_date_time() {
        let prague = FixedOffset::east_opt(3600).unwrap();
        let send_date = prague.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let order = Order::new(2, "OBJ-1", Product::PplParcelCzBusiness, send_date, sender(), recipient())
            .unwrap();

        let dto = order_in(&order);
        assert_eq!(dto.send_date, "2024-03-01T08:00:00+01:00");
        assert!(dto.send_time_from.is_none());
    }

    #[test]
    fn test_order_send_window_uses_combined_date_time() {
        let prague = FixedOffset::east_opt(3600).unwrap();
        let send_date = prague.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let window = SendTimeWindow::new(
            prague.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            prague.with_ymd_and_hms(2024, 3, 1, 16, 30, 0).unwrap(),
        )
        .unwrap();
        let order = Order::new(1, "OBJ-2", Product::PplParcelCzBusiness, send_date, sender(), recipient())
            .unwrap()
            .with_send_time(window);

        let value = serde_json::to_value(order_in(&order)).unwrap();
        assert_eq!(value["SendDate"], json!("2024-03-01T00:00:00+01:00"));
        assert_eq!(value["SendTimeFrom"], json!("2024-03-01T08:00:00+01:00"));
        assert_eq!(value["SendTimeTo"], json!("2024-03-01T16:30:00+01:00"));
    }

    #[test]
    fn test_package_take_window_uses_date_and_time_only() {
        let delivery = SpecialDelivery::new()
            .with_take(
                NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                NaiveTime::from_hms_opt(7, 30, 0),
                NaiveTime::from_hms_opt(11, 0, 0),
            )
            .unwrap();
        let package = Package::new("40950000114", Product::PplParcelCzPrivate, recipient())
            .unwrap()
            .with_special_delivery(delivery);

        let value = serde_json::to_value(package_in(&package)).unwrap();
        assert_eq!(
            value["SpecDelivery"],
            json!({
                "SpecTakeDate": "2024-03-05",
                "SpecTakeTimeFrom": "07:30:00",
                "SpecTakeTimeTo": "11:00:00"
            })
        );
    }

    #[test]
    fn test_pickup_order_uses_date_only() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let order = PickupOrder::new("SVOZ-1", 3, date, sender()).unwrap();
        assert_eq!(pickup_order_in(&order).send_date, "2024-03-01");
    }

    #[test]
    fn test_special_delivery_uses_date_and_time_only() {
        let delivery = SpecialDelivery::default().with_delivery(
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0),
            NaiveTime::from_hms_opt(12, 30, 0),
        )
        .unwrap();

        let dto = special_delivery_in(&delivery);
        assert_eq!(dto.spec_deliv_date.as_deref(), Some("2024-03-04"));
        assert_eq!(dto.spec_deliv_time_from.as_deref(), Some("09:00:00"));
        assert_eq!(dto.spec_deliv_time_to.as_deref(), Some("12:30:00"));
        assert!(dto.spec_take_date.is_none());
    }

    #[test]
    fn test_cod_payment_fields() {
        let payment = PaymentInfo::cash_on_delivery(Currency::CZK, Decimal::new(49900, 2), "2024001")
            .unwrap();
        let value = serde_json::to_value(payment_info_in(&payment)).unwrap();

        assert_eq!(value["CodCurrency"], json!("CZK"));
        assert_eq!(value["CodVarSym"], json!("2024001"));
        assert!(value.get("InsurPrice").is_none());
        assert!(value.get("IBAN").is_none());
    }

    #[test]
    fn test_flag_list_collapses_when_empty() {
        assert!(flag_list(&[]).is_none());
        let flags = vec![Flag::new("CL", true).unwrap()];
        assert_eq!(flag_list(&flags).unwrap().items.len(), 1);
    }
}
